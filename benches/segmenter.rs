use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ipanema::{EmojiSegmenter, PresentationStyle, Range, RunSegmenter, Script, ScriptSegmenter, Segmenter};
use std::hint::black_box;

/// Generate test buffers covering the segmentation scenarios that matter
fn generate_test_data() -> Vec<(&'static str, Vec<u32>)> {
    let scalars = |text: &str| text.chars().map(u32::from).collect::<Vec<u32>>();
    vec![
        // ASCII only
        ("ascii_text", scalars("Hello, World! This is a simple ASCII text.")),
        // Mixed scripts with neutral punctuation between them
        (
            "mixed_scripts",
            scalars("Hello \u{4E16}\u{754C}, \u{0645}\u{0631}\u{062D}\u{0628}\u{0627} \u{D0A4}\u{C2A4}!"),
        ),
        // Emoji-heavy content
        (
            "emoji_heavy",
            scalars("\u{1F389}\u{1F980}\u{1F680} Rust! \u{1F469}\u{200D}\u{1F469}\u{200D}\u{1F467} \u{26F9}\u{1F3FB}\u{1F1E9}\u{1F1EA}"),
        ),
        // Subdivision flags: long tag sequences
        (
            "tag_sequences",
            scalars(&"\u{1F3F4}\u{E0067}\u{E0062}\u{E0077}\u{E006C}\u{E0073}\u{E007F}".repeat(8)),
        ),
        // Large text block (simulating a paragraph stream)
        ("large_text", {
            let mut data = Vec::new();
            for i in 0..1000 {
                data.extend(scalars(&format!(
                    "Line {i}: Hello \u{1F30D} World! \u{4E2D}\u{6587} {}\n",
                    "\u{1F980}".repeat(5)
                )));
            }
            data
        }),
    ]
}

fn bench_run_segmenter(c: &mut Criterion) {
    let test_data = generate_test_data();

    let mut group = c.benchmark_group("run_segmenter");

    for (name, data) in test_data.iter() {
        group.bench_with_input(BenchmarkId::new("consume", name), data, |b, data| {
            b.iter(|| {
                let mut segmenter = RunSegmenter::new(black_box(data));
                let mut segment = Range::default();
                let mut runs = 0usize;
                while segmenter.consume(&mut segment) {
                    runs += 1;
                }
                runs
            });
        });
    }

    group.finish();
}

fn bench_sub_segmenters(c: &mut Criterion) {
    let test_data = generate_test_data();

    let mut group = c.benchmark_group("sub_segmenters");

    for (name, data) in test_data.iter() {
        group.bench_with_input(BenchmarkId::new("script", name), data, |b, data| {
            b.iter(|| {
                let mut segmenter = ScriptSegmenter::new(black_box(data));
                let mut end = 0;
                let mut script = Script::default();
                let mut runs = 0usize;
                while segmenter.consume(&mut end, &mut script) {
                    runs += 1;
                }
                runs
            });
        });

        group.bench_with_input(BenchmarkId::new("emoji", name), data, |b, data| {
            b.iter(|| {
                let mut segmenter = EmojiSegmenter::new(black_box(data));
                let mut end = 0;
                let mut style = PresentationStyle::default();
                let mut runs = 0usize;
                while segmenter.consume(&mut end, &mut style) {
                    runs += 1;
                }
                runs
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_run_segmenter, bench_sub_segmenters);
criterion_main!(benches);
