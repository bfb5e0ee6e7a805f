use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chrono::NaiveDate;
use faktur_core::{Percent, Rupiah};
use faktur_invoicing::{
    calculate, CompanyProfile, DocumentRenderer, InvoiceDraft, Layout, LineItem, TaxConfig,
    TaxPolicy,
};
use rust_decimal::Decimal;

fn items(count: usize) -> Vec<LineItem> {
    (0..count)
        .map(|i| {
            LineItem::new(
                format!("Sewa unit {i}"),
                Decimal::from(i as u64 % 5 + 1),
                Rupiah::from(75_000 + i as u64 * 1_250),
                Decimal::from(i as u64 % 7 + 1),
            )
        })
        .collect()
}

fn tax(policy: TaxPolicy) -> TaxConfig {
    TaxConfig::new(Percent::from(11), Percent::from(2), Rupiah::from(250_000), policy)
}

fn bench_calculate(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate");

    for count in [1usize, 10, 100, 1_000] {
        let items = items(count);
        group.throughput(Throughput::Elements(count as u64));
        for policy in [TaxPolicy::DownPaymentFirst, TaxPolicy::WithholdingFirst] {
            let tax = tax(policy);
            group.bench_with_input(
                BenchmarkId::new(policy.as_str(), count),
                &items,
                |b, items| b.iter(|| calculate(black_box(items), black_box(&tax))),
            );
        }
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let issue = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();

    for count in [1usize, 25, 250] {
        let mut header_draft = InvoiceDraft::new("INV-BNCH/BNN/01/2025", issue);
        header_draft
            .apply(faktur_invoicing::DraftEdit::SetCustomerName("Budi".to_string()))
            .unwrap();
        let draft = InvoiceDraft::from_parts(
            header_draft.header().clone(),
            items(count),
            tax(TaxPolicy::DownPaymentFirst),
        );

        for layout in [Layout::Compact, Layout::Letterhead] {
            let renderer = DocumentRenderer::new(layout, CompanyProfile::default());
            group.bench_with_input(
                BenchmarkId::new(layout.as_str(), count),
                &draft,
                |b, draft| b.iter(|| renderer.render(black_box(draft.view()))),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_calculate, bench_render);
criterion_main!(benches);
