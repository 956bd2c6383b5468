use crate::*;
use backtrace::Backtrace;

use parking_lot::Mutex;
use std::any::Any;
use std::borrow::Cow;
use std::panic::{Location, UnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};

lazy_static! {
    static ref HAS_PANICKED: AtomicBool = AtomicBool::default();
    static ref PANICS: Mutex<Vec<Panic>> = Mutex::new(Vec::new());
}

#[derive(Debug)]
pub struct Panic {
    pub message: String,
    pub location: Option<String>,
    pub backtrace: Backtrace,
}

/// Replaces the default hook, which would print straight to stderr and race the async logger
pub fn init_panic_detection() {
    std::panic::set_hook(Box::new(|panic| {
        register_panic(panic.payload(), panic.location());
    }));

    info!("initialized panic handler");
}

/// Takes all panics registered so far
pub fn panics() -> Vec<Panic> {
    std::mem::take(&mut *PANICS.lock())
}

pub fn has_panicked() -> bool {
    HAS_PANICKED.load(Ordering::Relaxed)
}

fn register_panic(payload: &(dyn Any + Send), location: Option<&Location>) {
    let message = payload
        .downcast_ref::<&str>()
        .map(|s| Cow::Borrowed(*s))
        .or_else(|| payload.downcast_ref::<String>().map(|s| Cow::Borrowed(s.as_str())))
        .unwrap_or(Cow::Borrowed("<unknown>"));

    let location = location.map(|loc| loc.to_string());

    error!("handling panic"; "message" => %message, "location" => ?location);

    HAS_PANICKED.store(true, Ordering::Relaxed);

    PANICS.lock().push(Panic {
        message: message.into_owned(),
        location,
        backtrace: Backtrace::new_unresolved(),
    });
}

/// None if `do_me` panicked
pub fn run_and_handle_panics<R: Debug>(do_me: impl FnOnce() -> R + UnwindSafe) -> Option<R> {
    let result = std::panic::catch_unwind(do_me);
    let all_panics = panics();

    let res = match result {
        Ok(res) if all_panics.is_empty() => return Some(res),
        Ok(res) => res,
        Err(_) => {
            for Panic {
                message,
                location,
                mut backtrace,
            } in all_panics
            {
                backtrace.resolve();
                crit!("panic";
                    "message" => message,
                    "location" => ?location,
                    "backtrace" => ?backtrace,
                );
            }

            return None;
        }
    };

    // caught by someone else further down, the result is still usable
    warn!("{count} panics were caught before returning", count = all_panics.len(); "result" => ?res);
    Some(res)
}
