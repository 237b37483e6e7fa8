use casecycle::{to_separated_case, transform};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn selection(lines: usize) -> String {
    let samples = [
        "user_name",
        "UserName",
        "USER_NAME",
        "userName",
        "getHTTPResponseCode",
        "    indented_value",
        "",
        "hello",
    ];
    (0..lines)
        .map(|i| samples[i % samples.len()])
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_transform(c: &mut Criterion) {
    let text = selection(10_000);
    c.bench_function("transform 10k lines", |b| b.iter(|| transform(black_box(&text))));
}

fn bench_acronyms(c: &mut Criterion) {
    c.bench_function("separate acronym-heavy identifier", |b| {
        b.iter(|| to_separated_case(black_box("parseXMLHTTPRequestIOErrorHandlerURL"), '_'))
    });
}

criterion_group!(benches, bench_transform, bench_acronyms);
criterion_main!(benches);
