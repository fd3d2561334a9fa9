///
/// List Runtime Support
///
/// C ABI over `TaggedList`. One entry point per scalar variant replaces the
/// `list_get(int_v, ...)` style of the generated code, so the variant a
/// slot is read as is always checked against the variant it was stored as.
///

use std::cell::RefCell;
use std::ffi::c_char;

use minipy_std_core::{RuntimeError, TaggedList, Value};

use crate::fatal::OrFatal;
use crate::registry::{ListHandle, ListRegistry};

thread_local! {
    static LISTS: RefCell<ListRegistry> = RefCell::new(ListRegistry::default());
}

fn with_lists<T>(f: impl FnOnce(&mut ListRegistry) -> Result<T, RuntimeError>) -> T {
    LISTS.with_borrow_mut(f).or_fatal()
}

fn fill(handle: ListHandle, value: Value) {
    with_lists(|lists| lists.get_mut(handle)?.fill_next(value));
}

fn append(handle: ListHandle, value: Value) {
    with_lists(|lists| lists.get_mut(handle)?.append(value));
}

fn get<T>(handle: ListHandle, index: i64, extract: impl FnOnce(&Value) -> Result<T, RuntimeError>) -> T {
    with_lists(|lists| extract(lists.get(handle)?.get(index)?))
}

/// Release every list still registered on this thread
pub(crate) fn release_all() -> usize {
    LISTS.with_borrow_mut(ListRegistry::clear)
}

#[unsafe(no_mangle)]
pub extern "C" fn minipy_list_init(length: i64) -> ListHandle {
    crate::config();
    let length = usize::try_from(length)
        .map_err(|_| RuntimeError::InvalidLength { length })
        .or_fatal();
    let list = TaggedList::allocate(length).or_fatal();
    with_lists(|lists| Ok(lists.insert(list)))
}

#[unsafe(no_mangle)]
pub extern "C" fn minipy_list_free(handle: ListHandle) {
    with_lists(|lists| lists.release(handle));
}

#[unsafe(no_mangle)]
pub extern "C" fn minipy_list_len(handle: ListHandle) -> i64 {
    with_lists(|lists| Ok(lists.get(handle)?.len() as i64))
}

#[unsafe(no_mangle)]
pub extern "C" fn minipy_list_init_add_int(handle: ListHandle, value: i64) {
    fill(handle, value.into());
}

#[unsafe(no_mangle)]
pub extern "C" fn minipy_list_init_add_float(handle: ListHandle, value: f64) {
    fill(handle, value.into());
}

#[unsafe(no_mangle)]
pub extern "C" fn minipy_list_init_add_char(handle: ListHandle, value: c_char) {
    fill(handle, Value::Char(value as u8));
}

#[unsafe(no_mangle)]
pub extern "C" fn minipy_list_init_add_bool(handle: ListHandle, value: i32) {
    fill(handle, (value != 0).into());
}

#[unsafe(no_mangle)]
pub extern "C" fn minipy_list_add_int(handle: ListHandle, value: i64) {
    append(handle, value.into());
}

#[unsafe(no_mangle)]
pub extern "C" fn minipy_list_add_float(handle: ListHandle, value: f64) {
    append(handle, value.into());
}

#[unsafe(no_mangle)]
pub extern "C" fn minipy_list_add_char(handle: ListHandle, value: c_char) {
    append(handle, Value::Char(value as u8));
}

#[unsafe(no_mangle)]
pub extern "C" fn minipy_list_add_bool(handle: ListHandle, value: i32) {
    append(handle, (value != 0).into());
}

#[unsafe(no_mangle)]
pub extern "C" fn minipy_list_get_int(handle: ListHandle, index: i64) -> i64 {
    get(handle, index, Value::expect_int)
}

#[unsafe(no_mangle)]
pub extern "C" fn minipy_list_get_float(handle: ListHandle, index: i64) -> f64 {
    get(handle, index, Value::expect_float)
}

#[unsafe(no_mangle)]
pub extern "C" fn minipy_list_get_char(handle: ListHandle, index: i64) -> c_char {
    get(handle, index, Value::expect_char) as c_char
}

#[unsafe(no_mangle)]
pub extern "C" fn minipy_list_get_bool(handle: ListHandle, index: i64) -> i32 {
    get(handle, index, Value::expect_bool) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_lifecycle_over_c_abi() {
        let list = minipy_list_init(2);
        minipy_list_init_add_int(list, 10);
        minipy_list_init_add_int(list, 20);
        minipy_list_add_int(list, 30);

        assert_eq!(minipy_list_len(list), 3);
        assert_eq!(minipy_list_get_int(list, 0), 10);
        assert_eq!(minipy_list_get_int(list, 2), 30);

        minipy_list_free(list);
        minipy_list_free(crate::registry::NULL_HANDLE);
    }

    #[test]
    fn test_scalar_variants_over_c_abi() {
        let list = minipy_list_init(3);
        minipy_list_init_add_float(list, 1.25);
        minipy_list_init_add_char(list, b'k' as c_char);
        minipy_list_init_add_bool(list, 1);
        minipy_list_add_bool(list, 0);
        minipy_list_add_char(list, b'z' as c_char);
        minipy_list_add_float(list, -2.0);

        assert_eq!(minipy_list_get_float(list, 0), 1.25);
        assert_eq!(minipy_list_get_char(list, 1), b'k' as c_char);
        assert_eq!(minipy_list_get_bool(list, 2), 1);
        assert_eq!(minipy_list_get_bool(list, 3), 0);
        assert_eq!(minipy_list_get_char(list, 4), b'z' as c_char);
        assert_eq!(minipy_list_get_float(list, 5), -2.0);

        minipy_list_free(list);
    }

    #[test]
    fn test_release_all_frees_outstanding_lists() {
        minipy_list_init(0);
        minipy_list_init(4);
        assert_eq!(release_all(), 2);
        assert_eq!(release_all(), 0);
    }
}
