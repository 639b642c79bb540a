use criterion::{Criterion, black_box, criterion_group, criterion_main};

use brdoc::*;

const CPFS: [&str; 4] = ["000.000.001-91", "156.846.111-92", "013.163.591-31", "15684611193"];
const CNPJS: [&str; 3] = ["44.679.387/0001-20", "72039208000125", "44.529.023/0001-64"];

fn bench_validate_cpf(c: &mut Criterion) {
    c.bench_function("is_valid_cpf", |b| {
        b.iter(|| {
            for cpf in CPFS {
                black_box(is_valid(black_box(cpf)));
            }
        });
    });
}

fn bench_validate_cnpj(c: &mut Criterion) {
    c.bench_function("is_valid_cnpj", |b| {
        b.iter(|| {
            for cnpj in CNPJS {
                black_box(is_valid(black_box(cnpj)));
            }
        });
    });
}

fn bench_format(c: &mut Criterion) {
    c.bench_function("format_any", |b| {
        b.iter(|| {
            black_box(format_any(black_box("00000000191")));
            black_box(format_any(black_box("12345678000100")));
            black_box(format_any(black_box("aaaaaaaaaaa")));
        });
    });
}

fn bench_complete(c: &mut Criterion) {
    c.bench_function("complete_cnpj", |b| {
        b.iter(|| black_box(complete(black_box("446793870001"))));
    });
}

fn bench_normalize(c: &mut Criterion) {
    let text = "Procuradoria-Geral do Estado - Dívida Ativa: ação de cobrança nº 123.";
    c.bench_function("normalize_then_strip", |b| {
        b.iter(|| {
            let n = text::normalize_diacritics(black_box(text));
            black_box(text::strip_punctuation_except_dot_dash_space(&n))
        });
    });
}

criterion_group!(
    benches,
    bench_validate_cpf,
    bench_validate_cnpj,
    bench_format,
    bench_complete,
    bench_normalize
);
criterion_main!(benches);
