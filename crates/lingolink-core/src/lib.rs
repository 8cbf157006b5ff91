#![warn(missing_docs)]
//! LingoLink Core - Link Validation & Path Resolution Engine
//!
//! # Overview
//!
//! `lingolink-core` flags markdown hyperlinks that point into a shared
//! (locale-less) documentation tree when a localized copy of the link target
//! already exists, and produces the textual quick-fix that inserts the
//! correct locale segment. It is headless: text goes in, structured
//! diagnostics come out, and the only external effect is a read-only
//! existence query against an injected oracle.
//!
//! # Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  LinkValidator (per-document orchestration) │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Fix Generator (span re-parse → TextEdit)   │  ← Quick fixes
//! ├─────────────────────────────────────────────┤
//! │  Existence Oracle (injected, fail-closed)   │  ← Filesystem boundary
//! ├─────────────────────────────────────────────┤
//! │  Path Resolver (content-tree grammar)       │  ← Path arithmetic
//! ├─────────────────────────────────────────────┤
//! │  Link Extractor (strict /docs/ grammar)     │  ← Text scanning
//! ├─────────────────────────────────────────────┤
//! │  Locale Classifier (LocaleSet)              │  ← Configuration
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use lingolink_core::{LinkValidator, LocaleSet, ResourceKind, build_fix};
//! use std::path::Path;
//!
//! // Any closure over (path, kind) works as an existence oracle.
//! let mut validator = LinkValidator::new(
//!     LocaleSet::default(),
//!     |_: &Path, _: ResourceKind| true,
//! );
//!
//! let doc = Path::new("/site/content/ko/docs/concepts/overview.md");
//! let text = "See [Pods](/docs/concepts/workloads/pods/).";
//! let count = validator.validate_document(doc, text).unwrap();
//! assert_eq!(count, 1);
//!
//! let edit = build_fix(text, &validator.diagnostics(doc)[0]).unwrap();
//! assert_eq!(
//!     edit.apply(text),
//!     "See [Pods](/ko/docs/concepts/workloads/pods/).",
//! );
//! ```
//!
//! # Module Description
//!
//! - [`locale`] - locale configuration and content-path classification
//! - [`extract`] - link candidate extraction over raw markdown text
//! - [`resolve`] - expected localized path computation
//! - [`oracle`] - filesystem existence boundary
//! - [`diagnostics`] - diagnostics data model
//! - [`validate`] - per-document validation orchestration
//! - [`fix`] - quick-fix (text replacement) generation
//!
//! # Conventions
//!
//! - All spans are half-open character-offset ranges (Unicode scalar values,
//!   not bytes).
//! - Diagnostics for a document are fully replaced on every validation pass,
//!   never patched incrementally.
//! - Existence checks fail closed: an unreadable filesystem yields a missed
//!   diagnostic, never a false positive.

pub mod diagnostics;
pub mod extract;
pub mod fix;
pub mod locale;
pub mod oracle;
pub mod resolve;
pub mod validate;

pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticRange, DiagnosticSeverity};
pub use extract::{ExtractError, LinkMatch, extract_links};
pub use fix::{TextEdit, build_fix};
pub use locale::LocaleSet;
pub use oracle::{ExistenceOracle, FsOracle};
pub use resolve::{MARKDOWN_EXT, ResourceKind, resolve_expected_path};
pub use validate::{LinkValidator, ValidateError};
