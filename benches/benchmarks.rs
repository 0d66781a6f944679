//! Performance benchmarks for treedoc

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use treedoc::test_utils::TestTree;
use treedoc::{GenerateConfig, IgnoreMatcher, OutputFormat, WalkerConfig, generate_document};

const RUST_SOURCE: &str = r#"//! Module documentation

use std::path::Path;

fn main() {
    println!("Hello, world!");
}
"#;

fn create_test_tree(dirs: usize, files_per_dir: usize) -> TestTree {
    let tree = TestTree::new();
    for d in 0..dirs {
        for f in 0..files_per_dir {
            tree.add_file(&format!("dir_{}/file_{}.rs", d, f), RUST_SOURCE);
        }
        tree.add_file(&format!("dir_{}/node_modules/pkg/index.js", d), "");
        tree.add_file(&format!("dir_{}/debug.log", d), "log");
    }
    tree
}

fn bench_ignore_matcher(c: &mut Criterion) {
    let matcher = IgnoreMatcher::new(&["*.tmp".to_string(), "target/**".to_string()]).unwrap();

    let mut group = c.benchmark_group("ignore_matcher");
    group.bench_function("kept_path", |b| {
        b.iter(|| matcher.is_ignored(black_box("src/tree/walker.rs"), false))
    });
    group.bench_function("ignored_dir", |b| {
        b.iter(|| matcher.is_ignored(black_box("packages/web/node_modules"), true))
    });
    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_document");

    let small = create_test_tree(5, 10);
    let structure = GenerateConfig::default();
    group.bench_function("structure_50_files", |b| {
        b.iter(|| generate_document(black_box(small.path()), &structure))
    });

    let medium = create_test_tree(20, 25);
    let with_code = GenerateConfig {
        walker: WalkerConfig {
            include_contents: true,
            show_size: true,
            ..Default::default()
        },
        format: OutputFormat::Text,
    };
    group.bench_function("structure_with_code_500_files", |b| {
        b.iter(|| generate_document(black_box(medium.path()), &with_code))
    });

    group.finish();
}

criterion_group!(benches, bench_ignore_matcher, bench_generate);
criterion_main!(benches);
