//! Poll and timeout clock backed by `gloo-timers`.

use std::future::Future;
use std::time::Duration;

use roomlog::Clock;

/// Browser timer source. Native builds resolve immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        #[cfg(feature = "csr")]
        {
            gloo_timers::future::sleep(duration)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = duration;
            std::future::ready(())
        }
    }
}
