use criterion::{Criterion, criterion_group, criterion_main};
use fountain_neuraxis_engine::parse;

fn generate_screenplay(scenes: usize) -> String {
    let mut content = String::from("Title: Benchmark\nAuthor: Criterion\n\n");
    for i in 0..scenes {
        content.push_str(&format!("INT. ROOM {i} - DAY #{i}#\n\n"));
        content.push_str("= Something happens here.\n\n");
        content.push_str("A long line of action that wraps\nonto a second line.\n\n");
        content.push_str("JOHN\n(quietly)\nWe should go.\nNow.\n\n");
        content.push_str("JANE^\nNot yet.\n\n");
        content.push_str("/* rewrite\nthis beat */\n\n");
        content.push_str("CUT TO:\n\n");
    }
    content
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = generate_screenplay(500);
    group.bench_function("parse_500_scenes", |b| {
        b.iter(|| {
            let doc = parse(std::hint::black_box(&content));
            std::hint::black_box(doc);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
