#![no_main]
use libfuzzer_sys::fuzz_target;
use name_format::{format, Component, FormatOptions, MarkupStyle, NameComponents};

fuzz_target!(|data: [String; 3]| {
    let [pattern, given, family] = data;
    let name = NameComponents::new()
        .with(Component::Given, &given)
        .with(Component::Family, &family);

    for markup in [MarkupStyle::None, MarkupStyle::Microdata] {
        let options = FormatOptions {
            markup,
            ..FormatOptions::default()
        };
        format(&name, &pattern, &options);
    }
});
