#![no_main]

use libfuzzer_sys::fuzz_target;
use segue::order::PlayOrder;

fuzz_target!(|data: &[u8]| {
    let mut order = PlayOrder::new();
    let mut len = (data.len() % 16).max(1);
    let mut current = None;

    for byte in data {
        match byte % 5 {
            0 => {
                order.cycle_mode(len, current);
            }
            1 => {
                if let Some(next) = order.next(current, len) {
                    assert!(next < len);
                    current = Some(next);
                }
            }
            2 => {
                if let Some(previous) = order.previous(current, len) {
                    assert!(previous < len);
                    current = Some(previous);
                }
            }
            3 => len = (len + 1).min(64),
            _ => {
                len = len.saturating_sub(1);
                current = current.filter(|index| *index < len);
            }
        }
    }
});
