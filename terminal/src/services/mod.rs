//! # Services Module
//!
//! Integrations with the outside world: the journal REST API and the persisted session credential.
//!
//! ```text
//! services/
//! ├── api/        - HTTP client, interceptor and one function per remote operation
//! └── session.rs  - CredentialStore (file-backed and in-memory)
//! ```
//!
//! ## Service Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    journal (CLI)                         │
//! │                                                          │
//! │  Dashboard / Journal / Session controllers               │
//! │                │ Arc<dyn JournalApi>                     │
//! │  ┌─────────────▼──────────┐     ┌──────────────────────┐ │
//! │  │  ApiClient             │────▶│  CredentialStore     │ │
//! │  │  + AuthInterceptor     │     │  (session.rs)        │ │
//! │  └─────────────┬──────────┘     └──────────────────────┘ │
//! └────────────────┼─────────────────────────────────────────┘
//!                  │ HTTP/JSON (login: form-urlencoded)
//!                  ▼
//! ┌──────────────────────────────┐
//! │  Journal REST API            │
//! │  /auth/*  /users/me          │
//! │  /trades/*  /analytics/*     │
//! └──────────────────────────────┘
//! ```

pub mod api;
pub mod session;

pub use api::ApiClient;
pub use session::{CredentialStore, FileCredentialStore, MemoryCredentialStore};
