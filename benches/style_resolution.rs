// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for text input style resolution.
//!
//! Style resolution runs on every view pass for every input on screen, so
//! it has to stay trivially cheap.

use criterion::{criterion_group, criterion_main, Criterion};
use frosting::text_input::{AffixStyle, ResolvedStyle, Variant};
use frosting::theme::Theme;
use std::hint::black_box;

fn bench_style_resolution(c: &mut Criterion) {
    let theme = Theme::light();

    c.bench_function("resolve_default_variant", |b| {
        b.iter(|| {
            ResolvedStyle::resolve(
                black_box(&theme),
                black_box(Variant::Default),
                black_box(false),
                black_box(false),
                AffixStyle::Solid,
                AffixStyle::Solid,
            )
        })
    });

    c.bench_function("resolve_all_variants", |b| {
        b.iter(|| {
            for variant in [Variant::Default, Variant::Darker, Variant::Lighter] {
                for error in [false, true] {
                    for disabled in [false, true] {
                        black_box(ResolvedStyle::resolve(
                            &theme,
                            variant,
                            error,
                            disabled,
                            AffixStyle::Subtle,
                            AffixStyle::Solid,
                        ));
                    }
                }
            }
        })
    });
}

criterion_group!(benches, bench_style_resolution);
criterion_main!(benches);
