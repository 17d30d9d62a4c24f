/// Data layer: core types, loading, sampling, and saving.
///
/// Architecture:
/// ```text
///    .csv
///      │
///      ▼
///  ┌────────┐
///  │ loader  │  parse file → Table (typed cells)
///  └────────┘
///      │
///      ▼
///  ┌─────────┐
///  │ sampler  │  group rows by one column → up to K random rows per group
///  └─────────┘
///      │
///      ▼
///  ┌────────┐
///  │ saver   │  Table → dir/file.csv (dir created if missing)
///  └────────┘
/// ```

pub mod error;
pub mod loader;
pub mod model;
pub mod sampler;
pub mod saver;
