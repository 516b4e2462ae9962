//! Geteilte Konfiguration für `app`, `ui` und den Bootstrap in `main`.

pub mod options;

pub use options::SelectionOptions;
