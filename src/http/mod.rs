//! HTTP protocol implementation.
//!
//! A deliberately small subset of HTTP/1.x: one `GET` per connection, a
//! status line, a single `Content-Type` header and the raw file bytes. The
//! peer reads until the connection closes.
//!
//! # Architecture
//!
//! - **`connection`**: The per-connection worker and its state machine
//! - **`head`**: Bounded reading of the request head off the socket
//! - **`parser`**: Extracts method, target and protocol from the request line
//! - **`request`**: Parsed request representation
//! - **`response`**: Status codes, content-type formatting and response descriptors
//! - **`writer`**: Writes the response head and streams the body in chunks
//! - **`mime`**: Content-type detection based on file extensions
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Read the request head
//!        └──────┬──────┘
//!               │ Request parsed         (parse failure → 400 or Closed)
//!               ▼
//!        ┌──────────────────┐
//!        │    Resolving     │ ← Map the target to a file under the root
//!        └──────┬───────────┘
//!               │ Descriptor ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Streaming     │ ← Send head and file bytes
//!        └──────┬───────────┘
//!               ▼
//!            Closed
//! ```

pub mod connection;
pub mod head;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
