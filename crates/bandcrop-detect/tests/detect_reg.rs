//! Block detection regression test
//!
//! End-to-end checks on synthetic frames and on a letterboxed frame
//! fixture: the reported rows, the not-found case, and where the debug
//! image differs from its source.

use bandcrop_core::{Color, ImageFormat};
use bandcrop_detect::{
    AcceptancePolicy, DetectOptions, HighlightStyle, Rejection, detect_block,
    detect_block_in_file,
};
use bandcrop_test::synth::{frame_with_rects, light_frame, noise_frame};
use bandcrop_test::{RegParams, load_test_image, test_data_path};

#[test]
fn detect_reg() {
    let mut rp = RegParams::new("detect");

    // --- Test 1: full-width black band, rows 50..=249 ---
    let frame = frame_with_rects(720, 720, &[(0, 50, 719, 249)], Color::BLACK).expect("frame");
    let opts = DetectOptions::new(200, 60);
    let report = detect_block(&frame, &opts).expect("detect");
    let d = report.descriptor.expect("block found");
    rp.compare_values(50.0, d.start_y as f64, 0.0);
    rp.compare_values(200.0, d.height as f64, 0.0);
    let block = report.block.expect("block");
    rp.compare_values(0.0, block.min_x as f64, 0.0);
    rp.compare_values(719.0, block.max_x as f64, 0.0);
    rp.compare_values(1.0, report.candidates as f64, 0.0);
    rp.compare_true(report.debug_image.is_none(), "no debug image unless asked");

    // --- Test 2: debug image differs only in the band rows ---
    let report = detect_block(&frame, &opts.with_debug(true)).expect("detect debug");
    let debug = report.debug_image.expect("debug image");
    rp.write_raster(&debug, ImageFormat::Png).expect("write debug");
    let diff = frame.diff_rows(&debug).expect("diff");
    rp.compare_true(diff.confined_to_rows(50, 52), "diff confined to rows 50..52");
    rp.compare_values(2.0 * 720.0, diff.n_diff as f64, 0.0);
    rp.compare_true(debug.get_rgb(360, 51) == Some((255, 0, 0)), "band is red");

    // Thicker green band
    let style = HighlightStyle {
        thickness: 5,
        color: Color::GREEN,
    };
    let report = detect_block(&frame, &opts.with_debug(true).with_highlight(style))
        .expect("detect styled");
    let debug = report.debug_image.expect("styled debug");
    let diff = frame.diff_rows(&debug).expect("diff");
    rp.compare_values(5.0, diff.rows.len() as f64, 0.0);
    rp.compare_true(diff.confined_to_rows(50, 55), "diff confined to rows 50..55");

    // --- Test 3: nothing dark, nothing found ---
    let white = light_frame(720, 720).expect("white");
    let report = detect_block(&white, &opts.with_debug(true)).expect("detect white");
    rp.compare_true(!report.is_found(), "all-white frame has no block");
    rp.compare_true(report.debug_image.is_none(), "no debug image when not found");
    rp.compare_values(0.0, report.dark_pixels as f64, 0.0);

    // --- Test 4: detection is deterministic ---
    let noise = noise_frame(160, 160, 11).expect("noise");
    let a = detect_block(&noise, &DetectOptions::new(20, 60)).expect("run a");
    let b = detect_block(&noise, &DetectOptions::new(20, 60)).expect("run b");
    rp.compare_true(a.descriptor == b.descriptor, "same descriptor");
    rp.compare_true(a.block == b.block, "same block");
    rp.compare_values(a.dark_pixels as f64, b.dark_pixels as f64, 0.0);
    rp.compare_values(a.discarded as f64, b.discarded as f64, 0.0);

    // --- Test 5: letterboxed frame fixture ---
    let fixture = load_test_image("letterbox_frame.png").expect("fixture");
    rp.compare_values(720.0, fixture.width() as f64, 0.0);
    let report = detect_block(&fixture, &opts).expect("detect fixture");
    let d = report.descriptor.expect("fixture block");
    rp.compare_values(140.0, d.start_y as f64, 0.0);
    rp.compare_values(440.0, d.height as f64, 0.0);
    rp.compare_values(1.0, report.candidates as f64, 0.0);
    // 20 caption glyphs and one logo
    rp.compare_values(21.0, report.discarded as f64, 0.0);

    let policy = AcceptancePolicy::default();
    rp.compare_true(policy.evaluate(&d, fixture.height()).is_ok(), "fixture block accepted");

    let strict = policy.with_min_height(500);
    rp.compare_true(
        matches!(
            strict.evaluate(&d, fixture.height()),
            Err(Rejection::TooShort { height: 440, .. })
        ),
        "strict policy rejects the fixture block",
    );

    let from_file =
        detect_block_in_file(test_data_path("letterbox_frame.png"), &opts).expect("from file");
    rp.compare_true(from_file.descriptor == Some(d), "file and in-memory agree");

    assert!(rp.cleanup(), "detect regression test failed");
}
