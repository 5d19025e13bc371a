#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use xfact::{run_interactive, InteractiveOptions, SessionEvent, Width};

fuzz_target!(|data: &[u8]| {
    for width in Width::ALL {
        let options = InteractiveOptions {
            width,
            ..InteractiveOptions::default()
        };
        let mut stops = 0;
        let summary = run_interactive(Cursor::new(data), options, |event| {
            if matches!(event, SessionEvent::Stopped(_)) {
                stops += 1;
            }
            Ok(())
        })
        .expect("in-memory input never fails to read");
        assert_eq!(stops, 1);
        assert_eq!(summary.succeeded + summary.failed, summary.evaluated);
    }
});
