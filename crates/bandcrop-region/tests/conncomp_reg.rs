//! Connected component regression test
//!
//! Tests component containment and pixel accounting on noise, the
//! minimum-size boundary, top-most selection (ties resolved stably), and that
//! repeated runs agree.

use bandcrop_core::{Color, Mask};
use bandcrop_filter::{BinarizeOptions, Smoothing, binarize};
use bandcrop_region::{
    ConnectivityType, filter_by_min_size, find_connected_components, locate_blocks,
    select_topmost,
};
use bandcrop_test::RegParams;
use bandcrop_test::synth::{frame_with_rects, noise_frame};

#[test]
fn conncomp_reg() {
    let mut rp = RegParams::new("conncomp");

    // --- Test 1: every dark cell lies in exactly the counted components ---
    let noise = noise_frame(64, 64, 3).expect("noise");
    let mask = binarize(
        &noise,
        &BinarizeOptions::new(60).with_smoothing(Smoothing::None),
    )
    .expect("binarize");

    for conn in [ConnectivityType::FourWay, ConnectivityType::EightWay] {
        let comps = find_connected_components(&mask, conn).expect("components");
        let total: u64 = comps.iter().map(|c| c.pixel_count).sum();
        rp.compare_values(mask.count_dark() as f64, total as f64, 0.0);

        let mut uncovered = 0;
        for y in 0..mask.height() {
            for x in 0..mask.width() {
                if mask.is_dark(x, y)
                    && !comps
                        .iter()
                        .any(|c| (c.min_x..=c.max_x).contains(&x) && (c.min_y..=c.max_y).contains(&y))
                {
                    uncovered += 1;
                }
            }
        }
        rp.compare_values(0.0, uncovered as f64, 0.0);
        rp.compare_true(
            comps.iter().all(|c| c.min_x <= c.max_x && c.min_y <= c.max_y),
            "min <= max on both axes",
        );
    }

    // 8-connectivity can only merge 4-connected components
    let n4 = find_connected_components(&mask, ConnectivityType::FourWay)
        .expect("4-cc")
        .len();
    let n8 = find_connected_components(&mask, ConnectivityType::EightWay)
        .expect("8-cc")
        .len();
    rp.compare_true(n8 <= n4, "8-cc count <= 4-cc count");

    // --- Test 2: size filter boundary ---
    let mut blocks = Mask::new(700, 700).expect("mask");
    blocks.set_rect(0, 0, 199, 199);
    blocks.set_rect(250, 0, 448, 199);
    blocks.set_rect(0, 250, 199, 448);
    let scan = locate_blocks(&blocks, 200, ConnectivityType::EightWay).expect("scan 200");
    rp.compare_values(1.0, scan.components.len() as f64, 0.0);
    rp.compare_values(2.0, scan.discarded as f64, 0.0);
    let scan = locate_blocks(&blocks, 199, ConnectivityType::EightWay).expect("scan 199");
    rp.compare_values(3.0, scan.components.len() as f64, 0.0);
    rp.compare_values(0.0, scan.discarded as f64, 0.0);
    rp.compare_values(1.0, filter_by_min_size(&scan.components, 200).len() as f64, 0.0);

    // --- Test 3: top-most block wins ---
    let frame = frame_with_rects(
        720,
        720,
        &[(100, 300, 249, 449), (400, 10, 549, 159)],
        Color::BLACK,
    )
    .expect("frame");
    let mask = binarize(&frame, &BinarizeOptions::new(60)).expect("binarize");
    let scan = locate_blocks(&mask, 150, ConnectivityType::EightWay).expect("scan");
    rp.compare_values(2.0, scan.components.len() as f64, 0.0);
    let top = select_topmost(&scan.components).expect("top block");
    rp.compare_values(10.0, top.min_y as f64, 0.0);
    rp.compare_values(150.0, top.height() as f64, 0.0);
    rp.compare_values(400.0, top.min_x as f64, 0.0);

    // Equal tops: either block may win, but always the same one
    let frame = frame_with_rects(
        720,
        720,
        &[(100, 10, 249, 159), (400, 10, 549, 159)],
        Color::BLACK,
    )
    .expect("frame");
    let mask = binarize(&frame, &BinarizeOptions::new(60)).expect("binarize");
    let scan = locate_blocks(&mask, 150, ConnectivityType::EightWay).expect("scan");
    let top = select_topmost(&scan.components).expect("top block");
    rp.compare_values(10.0, top.min_y as f64, 0.0);
    let rescan = locate_blocks(&mask, 150, ConnectivityType::EightWay).expect("rescan");
    let again = select_topmost(&rescan.components).expect("top block again");
    rp.compare_true(top == again, "tie resolves the same way on every run");

    // --- Test 4: repeated runs agree ---
    let a = locate_blocks(&mask, 150, ConnectivityType::EightWay).expect("run a");
    let b = locate_blocks(&mask, 150, ConnectivityType::EightWay).expect("run b");
    rp.compare_true(a == b, "identical scans");

    assert!(rp.cleanup(), "conncomp regression test failed");
}
