#![no_main]

use libfuzzer_sys::fuzz_target;

const PREAMBLE: &str = "import numpy as np\nimport pandas as pd\n";

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        let translation = bplus::translate_with_diagnostics(s);
        assert!(translation.text.starts_with(PREAMBLE));
        for diag in &translation.diagnostics {
            assert!(diag.span.end <= s.len());
            assert!(s.is_char_boundary(diag.span.start) && s.is_char_boundary(diag.span.end));
        }
    }
});
