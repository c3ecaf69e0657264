#![no_main]

use kitdivide::{divide_parts, CategoryIndex, CategoryInfo, Part};
use libfuzzer_sys::fuzz_target;

const SUPER_CATEGORIES: [&str; 3] = ["Bricks", "Plates", "Technic"];

fn categories() -> CategoryIndex {
    CategoryIndex::new((0..4u32).map(|id| CategoryInfo {
        id,
        name: format!("Category {}", id),
        super_category: SUPER_CATEGORIES[(id % 3) as usize].to_string(),
        standard: id % 2 == 0,
    }))
    .unwrap()
}

fuzz_target!(|data: &[u8]| {
    let Some((&first, rest)) = data.split_first() else {
        return;
    };
    let divisions = 1 + u32::from(first % 8);
    let index = categories();

    // Three bytes per part: category, quantity, unit weight in tenths of a gram
    let parts: Vec<Part> = rest
        .chunks_exact(3)
        .enumerate()
        .map(|(i, chunk)| {
            let category_id = u32::from(chunk[0] % 4);
            let info = index.get(category_id).unwrap();
            Part::new(
                format!("p{}", i),
                "x".repeat(usize::from(chunk[0] % 5)),
                u32::from(chunk[1]),
                f64::from(chunk[2]) / 10.0,
                category_id,
                info.super_category.clone(),
                info.standard,
            )
        })
        .collect();

    let division = divide_parts(&parts, &index, divisions).unwrap();
    let tolerance = 1e-9 * division.grand_total.max(1.0);
    assert!((division.assigned_weight() - division.grand_total).abs() <= tolerance);
    assert!(division.groupings.len() <= parts.len());
    assert!(division.groupings.iter().all(|g| g.weight > 0.0));
});
