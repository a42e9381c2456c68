//! Task Watchdog Timer (TWDT) driver.
//!
//! Wraps the ESP-IDF TWDT API so a stalled scan loop resets the board
//! instead of leaving relays frozen mid-engagement.  The scan loop must
//! call `feed()` once per cycle.
//!
//! On host builds the watchdog only counts feeds.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

use log::info;

pub struct Watchdog {
    timeout_ms: u32,
    feeds: u64,
    #[cfg(target_os = "espidf")]
    subscribed: bool,
}

impl Watchdog {
    /// Configure the TWDT with `timeout_ms` and subscribe the calling task.
    #[cfg(target_os = "espidf")]
    pub fn new(timeout_ms: u32) -> Self {
        // SAFETY: TWDT configuration calls are made once from the main
        // task before the scan loop starts.
        unsafe {
            let cfg = esp_task_wdt_config_t {
                timeout_ms,
                idle_core_mask: 0,
                trigger_panic: true,
            };
            let ret = esp_task_wdt_reconfigure(&cfg);
            if ret != ESP_OK {
                log::warn!(
                    "TWDT reconfigure returned {} (may already be configured)",
                    ret
                );
            }

            let ret = esp_task_wdt_add(core::ptr::null_mut());
            let subscribed = ret == ESP_OK;
            if subscribed {
                info!("Watchdog: subscribed ({}ms timeout, panic on trigger)", timeout_ms);
            } else {
                log::warn!("Watchdog: failed to subscribe ({})", ret);
            }

            Self {
                timeout_ms,
                feeds: 0,
                subscribed,
            }
        }
    }

    /// Host fallback: no hardware timer behind it.
    #[cfg(not(target_os = "espidf"))]
    pub fn new(timeout_ms: u32) -> Self {
        info!("Watchdog(sim): {}ms timeout, not armed", timeout_ms);
        Self {
            timeout_ms,
            feeds: 0,
        }
    }

    /// Reset the watchdog countdown.
    pub fn feed(&mut self) {
        #[cfg(target_os = "espidf")]
        if self.subscribed {
            // SAFETY: the calling task subscribed in `new`.
            unsafe {
                esp_task_wdt_reset();
            }
        }
        self.feeds = self.feeds.wrapping_add(1);
    }

    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }

    /// Feeds since boot.
    pub fn feeds(&self) -> u64 {
        self.feeds
    }
}
