//! Stub wallet objects for the wasm test suites.
//!
//! CIP30 method dispatch is a plain property lookup, so a registry, a
//! provider entry or an api object can all be stood up as bare objects
//! carrying closure-backed methods.

use std::{cell::RefCell, rc::Rc};

use wasm_bindgen::{JsValue, prelude::Closure};

/// a fresh empty object
pub(crate) fn object() -> JsValue {
    js_sys::Object::new().into()
}

/// set `target[key] = value`
pub(crate) fn set(target: &JsValue, key: &str, value: impl AsRef<JsValue>) {
    js_sys::Reflect::set(target, &JsValue::from_str(key), value.as_ref()).unwrap();
}

/// a method resolving to `value`, whatever the arguments
pub(crate) fn resolving(value: JsValue) -> JsValue {
    Closure::<dyn Fn() -> JsValue>::new(move || js_sys::Promise::resolve(&value).into())
        .into_js_value()
}

/// a method rejecting with `error`, whatever the arguments
pub(crate) fn rejecting(error: JsValue) -> JsValue {
    Closure::<dyn Fn() -> JsValue>::new(move || js_sys::Promise::reject(&error).into())
        .into_js_value()
}

/// a one-argument method recording what it was called with before
/// resolving to `result`
pub(crate) fn recording1(calls: &Rc<RefCell<Vec<JsValue>>>, result: JsValue) -> JsValue {
    let calls = Rc::clone(calls);
    Closure::<dyn Fn(JsValue) -> JsValue>::new(move |argument: JsValue| {
        calls.borrow_mut().push(argument);
        js_sys::Promise::resolve(&result).into()
    })
    .into_js_value()
}

/// a two-argument method recording what it was called with before
/// resolving to `result`
pub(crate) fn recording2(calls: &Rc<RefCell<Vec<(JsValue, JsValue)>>>, result: JsValue) -> JsValue {
    let calls = Rc::clone(calls);
    Closure::<dyn Fn(JsValue, JsValue) -> JsValue>::new(move |first: JsValue, second: JsValue| {
        calls.borrow_mut().push((first, second));
        js_sys::Promise::resolve(&result).into()
    })
    .into_js_value()
}

/// a registry entry carrying the full provider shape
pub(crate) fn provider_entry(name: &str, api_version: &str, icon: &str) -> JsValue {
    let entry = object();
    set(&entry, "name", JsValue::from_str(name));
    set(&entry, "apiVersion", JsValue::from_str(api_version));
    set(&entry, "icon", JsValue::from_str(icon));
    set(&entry, "enable", js_sys::Function::new_no_args(""));
    set(&entry, "isEnabled", js_sys::Function::new_no_args(""));
    entry
}
