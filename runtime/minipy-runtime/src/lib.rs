///
/// minipy Runtime Static Library
///
/// Provides the runtime functions needed by compiled minipy programs.
/// This crate produces a static library (libminipy_runtime.a) that gets
/// linked with the generated C code to produce a standalone binary.
///
/// Contains:
/// - List builtins (minipy_list_init, minipy_list_init_add_*, minipy_list_add_*, ...)
/// - Typed I/O builtins (minipy_input_*, minipy_print, minipy_print_int)
/// - Runtime setup and teardown (minipy_runtime_init, minipy_runtime_shutdown)
///
/// Any runtime error reaching this layer is fatal: the program prints
/// `RUNTIME ERROR: <message>` and exits with status 1.
///

mod config;
mod fatal;
mod io;
mod list;
mod logging;
mod registry;

use std::io::Write;
use std::sync::OnceLock;

use tracing::{debug, warn};

pub use config::{CONFIG_ENV, ConfigError, LogConfig, RuntimeConfig};
pub use fatal::{FATAL_PREFIX, OrFatal, fatal, fatal_message};
pub use io::*;
pub use list::*;
pub use logging::LOG_ENV;
pub use registry::{ListHandle, ListRegistry, NULL_HANDLE};

pub use minipy_std_core::{Phase, RuntimeError, TaggedList, Value};
pub use minipy_std_io::{Console, IoConfig, Item, Tag};

static CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

/// Runtime configuration, loaded (and logging installed) on first use
pub fn config() -> &'static RuntimeConfig {
    CONFIG.get_or_init(|| {
        let (config, problem) = match RuntimeConfig::from_env() {
            Ok(config) => (config, None),
            Err(err) => (RuntimeConfig::default(), Some(err)),
        };
        logging::install(&config.log);
        if let Some(err) = problem {
            warn!(%err, "using default runtime config");
        }
        debug!(?config, "runtime initialized");
        config
    })
}

#[unsafe(no_mangle)]
pub extern "C" fn minipy_runtime_init() {
    config();
}

/// Release lists the program never freed and flush stdout
#[unsafe(no_mangle)]
pub extern "C" fn minipy_runtime_shutdown() {
    let leaked = list::release_all();
    debug!(leaked, "runtime shut down");
    let _ = std::io::stdout().flush();
}
