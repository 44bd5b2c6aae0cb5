use wasm_bindgen::JsValue;

/// The shape a single named capability must have on a JavaScript value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapabilityKind {
    /// The property must be present and callable.
    Method,
    /// The property must be defined; its type is not constrained further.
    Property,
}

/// One required capability: a property name plus the shape it must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capability {
    name: &'static str,
    kind: CapabilityKind,
}

impl Capability {
    pub const fn method(name: &'static str) -> Self {
        Self {
            name,
            kind: CapabilityKind::Method,
        }
    }

    pub const fn property(name: &'static str) -> Self {
        Self {
            name,
            kind: CapabilityKind::Property,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn kind(&self) -> CapabilityKind {
        self.kind
    }

    /// Check this capability against a JavaScript value.
    ///
    /// Values on which property access throws (primitives, `null`,
    /// `undefined`) have no capabilities at all.
    pub fn present_on(&self, target: &JsValue) -> bool {
        let Ok(value) = js_sys::Reflect::get(target, &JsValue::from_str(self.name)) else {
            return false;
        };
        match self.kind {
            CapabilityKind::Method => value.is_function(),
            CapabilityKind::Property => !value.is_undefined(),
        }
    }
}

/// A declared set of capabilities a JavaScript value must satisfy to cross
/// the bridge boundary in a given role.
///
/// The registry checks candidate entries against
/// [`CapabilityDescriptor::PROVIDER`] structurally, one property at a time,
/// before reporting a wallet as available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilityDescriptor {
    required: &'static [Capability],
}

impl CapabilityDescriptor {
    /// What a registry entry must expose to count as a usable CIP-30
    /// provider: a callable `enable` and a defined `apiVersion`.
    pub const PROVIDER: Self = Self::new(&[
        Capability::method("enable"),
        Capability::property("apiVersion"),
    ]);

    pub const fn new(required: &'static [Capability]) -> Self {
        Self { required }
    }

    pub const fn required(&self) -> &'static [Capability] {
        self.required
    }

    /// `true` iff every required capability is present on the value.
    pub fn is_satisfied_by(&self, value: &JsValue) -> bool {
        self.required
            .iter()
            .all(|capability| capability.present_on(value))
    }
}
