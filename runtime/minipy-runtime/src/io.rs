///
/// Typed I/O Runtime Support
///
/// C ABI over `Console`: one `input` entry point per readable tag, and a
/// `print` that takes parallel arrays of tag characters and argument slots
/// in place of a C variadic call.
///

use std::borrow::Cow;
use std::cell::RefCell;
use std::ffi::{CStr, c_char};
use std::io::{StdinLock, Stdout};

use minipy_std_core::{RuntimeError, Value};
use minipy_std_io::{Console, Item, Tag};

use crate::fatal::OrFatal;

type StdConsole = Console<StdinLock<'static>, Stdout>;

thread_local! {
    static CONSOLE: RefCell<Option<StdConsole>> = const { RefCell::new(None) };
}

fn with_console<T>(f: impl FnOnce(&mut StdConsole) -> Result<T, RuntimeError>) -> T {
    CONSOLE
        .with_borrow_mut(|slot| {
            let console = slot.get_or_insert_with(|| Console::stdio(crate::config().io.clone()));
            f(console)
        })
        .or_fatal()
}

/// One print argument. Which field is live is given by the matching tag.
#[repr(C)]
#[derive(Clone, Copy)]
pub union MinipyArg {
    pub int_v: i64,
    pub float_v: f64,
    pub char_v: c_char,
    pub bool_v: i32,
    pub str_v: *const c_char,
}

unsafe fn c_text<'a>(ptr: *const c_char) -> Cow<'a, str> {
    if ptr.is_null() {
        Cow::Borrowed("")
    } else {
        unsafe { CStr::from_ptr(ptr) }.to_string_lossy()
    }
}

/// Decode one argument slot under its tag. `text` is the decoded string for `s` slots.
unsafe fn item_from_arg<'a>(tag: c_char, arg: &MinipyArg, text: &'a str) -> Result<Item<'a>, RuntimeError> {
    let item = unsafe {
        match Tag::from_char(tag as u8 as char)? {
            Tag::Int => Item::Int(arg.int_v),
            Tag::Float => Item::Float(arg.float_v),
            Tag::Char => Item::Char(arg.char_v as u8),
            Tag::Bool => Item::Bool(arg.bool_v != 0),
            Tag::Str => Item::Str(text),
        }
    };
    Ok(item)
}

/// View the parallel print arrays. A zero count needs no arrays; a negative
/// count, or a missing array for a positive count, is rejected.
unsafe fn print_args<'a>(
    count: i64,
    tags: *const c_char,
    args: *const MinipyArg,
) -> Result<(&'a [c_char], &'a [MinipyArg]), RuntimeError> {
    let len = usize::try_from(count).map_err(|_| RuntimeError::InvalidPrintCall { count })?;
    if len == 0 {
        return Ok((&[][..], &[][..]));
    }
    if tags.is_null() || args.is_null() {
        return Err(RuntimeError::InvalidPrintCall { count });
    }
    unsafe {
        Ok((
            std::slice::from_raw_parts(tags, len),
            std::slice::from_raw_parts(args, len),
        ))
    }
}

fn read(prompt: &str, tag: Tag) -> Value {
    with_console(|console| console.read_typed(prompt, tag))
}

/// # Safety
/// `prompt` must be null or a valid NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn minipy_input_int(prompt: *const c_char) -> i64 {
    let prompt = unsafe { c_text(prompt) };
    read(&prompt, Tag::Int).expect_int().or_fatal()
}

/// # Safety
/// `prompt` must be null or a valid NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn minipy_input_float(prompt: *const c_char) -> f64 {
    let prompt = unsafe { c_text(prompt) };
    read(&prompt, Tag::Float).expect_float().or_fatal()
}

/// # Safety
/// `prompt` must be null or a valid NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn minipy_input_char(prompt: *const c_char) -> c_char {
    let prompt = unsafe { c_text(prompt) };
    read(&prompt, Tag::Char).expect_char().or_fatal() as c_char
}

/// # Safety
/// `prompt` must be null or a valid NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn minipy_input_bool(prompt: *const c_char) -> i32 {
    let prompt = unsafe { c_text(prompt) };
    read(&prompt, Tag::Bool).expect_bool().or_fatal() as i32
}

/// Print `count` tagged arguments separated by spaces, then a newline.
///
/// # Safety
/// `tags` and `args` must each point to `count` elements, and every `s`
/// argument must be null or a valid NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn minipy_print(count: i64, tags: *const c_char, args: *const MinipyArg) {
    let (tags, args) = unsafe { print_args(count, tags, args) }.or_fatal();

    let texts: Vec<Cow<'_, str>> = tags
        .iter()
        .zip(args)
        .map(|(&tag, arg)| {
            if tag as u8 == b's' {
                unsafe { c_text(arg.str_v) }
            } else {
                Cow::Borrowed("")
            }
        })
        .collect();

    let items = tags
        .iter()
        .zip(args)
        .zip(&texts)
        .map(|((&tag, arg), text)| unsafe { item_from_arg(tag, arg, text) })
        .collect::<Result<Vec<_>, _>>()
        .or_fatal();

    with_console(|console| console.write_typed(&items));
}

#[unsafe(no_mangle)]
pub extern "C" fn minipy_print_int(value: i64) {
    with_console(|console| console.write_typed(&[Item::Int(value)]));
}
