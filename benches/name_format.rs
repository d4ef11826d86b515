#[macro_use]
extern crate criterion;

mod bench {
    use name_format::{
        format, format_cached, format_list, Component, FormatOptions, ListOptions, MarkupStyle,
        NameComponents, TokenCache,
    };
    use std::fs::File;
    use std::io::prelude::*;
    use std::io::BufReader;

    use criterion::{black_box, criterion_group, Criterion};

    const DEFAULT: &str = "((((t+ig)+im)+if)+is)+kc";

    fn full_name() -> NameComponents {
        NameComponents::new()
            .with(Component::Title, "Dr")
            .with(Component::Given, "Juan")
            .with(Component::Middle, "Quincy")
            .with(Component::Family, "Velasquez y Garcia")
            .with(Component::Generational, "III")
            .with(Component::Credentials, "PhD")
    }

    fn formatting_given_family(c: &mut Criterion) {
        let name = NameComponents::new()
            .with(Component::Given, "Juan")
            .with(Component::Family, "Garcia");
        let options = FormatOptions::default();
        c.bench_function("given family", |b| {
            b.iter(|| black_box(format(&name, "g f", &options)))
        });
    }

    fn formatting_default(c: &mut Criterion) {
        let name = full_name();
        let options = FormatOptions::default();
        c.bench_function("default format", |b| {
            b.iter(|| black_box(format(&name, DEFAULT, &options)))
        });
    }

    fn formatting_microdata(c: &mut Criterion) {
        let name = full_name();
        let options = FormatOptions {
            markup: MarkupStyle::Microdata,
            ..FormatOptions::default()
        };
        c.bench_function("default format, microdata", |b| {
            b.iter(|| black_box(format(&name, DEFAULT, &options)))
        });
    }

    fn formatting_modifiers(c: &mut Criterion) {
        let name = full_name();
        let options = FormatOptions::default();
        c.bench_function("modifiers", |b| {
            b.iter(|| black_box(format(&name, "Ubf+(, )Fg+iTLy.", &options)))
        });
    }

    fn formatting_cached(c: &mut Criterion) {
        let name = full_name();
        let options = FormatOptions::default();
        let mut cache = TokenCache::new();
        c.bench_function("default format, cached", |b| {
            b.iter(|| black_box(format_cached(&mut cache, &name, DEFAULT, &options)))
        });
    }

    criterion_group!(
        e2e_formatting,
        formatting_given_family,
        formatting_default,
        formatting_microdata,
        formatting_modifiers,
        formatting_cached
    );

    fn formatting_many(c: &mut Criterion) {
        let f = File::open("tests/format-cases.txt").ok().unwrap();
        let reader = BufReader::new(f);
        let names: Vec<NameComponents> = reader
            .lines()
            .map(|l| l.ok().unwrap())
            .filter(|l| !l.starts_with('#') && l.contains('|'))
            .map(|l| {
                let mut name = NameComponents::new();
                for (component, value) in Component::ALL.iter().zip(l.split('|')) {
                    name.set(*component, value);
                }
                name
            })
            .collect();
        let options = FormatOptions::default();
        let list = ListOptions::default();

        c.bench_function(&format!("list of {} names", names.len()), |b| {
            b.iter(|| {
                let mut cache = TokenCache::new();
                black_box(format_list(&names, DEFAULT, &options, &list, &mut cache))
            })
        });
    }

    criterion_group!(realistic, formatting_many);
}

criterion_main!(bench::realistic, bench::e2e_formatting);
