use buildlog_classify::LineClassifier;
use buildlog_core::LineIndex;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn synthetic_log(line_count: usize) -> String {
    let mut out = String::with_capacity(line_count * 64);
    for i in 0..line_count {
        match i % 5 {
            0 => out.push_str(&format!(
                "[ {:2}%] Building CXX object src/part{i}.cpp.o\n",
                i % 100
            )),
            1 => out.push_str("[cmake] Checking compiler flags\n"),
            2 => out.push_str(&format!("copied /usr/local/lib/lib{i}.a at 12:{:02}:33\n", i % 60)),
            3 => out.push_str("warning: unused variable 'tmp'\n"),
            _ => out.push_str(&format!("ran tool{i}.exe from C:\\tools\\bin\n")),
        }
    }
    out.pop();
    out
}

fn bench_classify_full_log(c: &mut Criterion) {
    let classifier = LineClassifier::new().unwrap();
    let text = synthetic_log(10_000);

    c.bench_function("classify/10k_lines", |b| {
        b.iter(|| {
            let result = classifier.classify(black_box(&text));
            black_box(result.total_ranges());
        })
    });
}

fn bench_classify_prebuilt_index(c: &mut Criterion) {
    let classifier = LineClassifier::new().unwrap();
    let index = LineIndex::from_text(&synthetic_log(10_000));

    c.bench_function("classify_index/10k_lines", |b| {
        b.iter(|| {
            let result = classifier.classify_index(black_box(&index));
            black_box(result.total_ranges());
        })
    });
}

criterion_group!(benches, bench_classify_full_log, bench_classify_prebuilt_index);
criterion_main!(benches);
