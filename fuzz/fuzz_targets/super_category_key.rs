#![no_main]

use kitdivide::claim::UnclaimedSet;
use kitdivide::{Part, SuperCategoryStandard};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Parsed keys must render back to the input
        if let Ok(key) = input.parse::<SuperCategoryStandard>() {
            assert_eq!(key.to_string(), input);
        }

        // Claiming must never panic, matched or not
        let parts = vec![Part::new("3001", "Brick 2 x 4", 1, 2.32, 11, "Bricks", true)];
        let mut unclaimed = UnclaimedSet::for_parts(&parts);
        let _ = unclaimed.claim_super_category_standard(&parts, input);
    }
});
