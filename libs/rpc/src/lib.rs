//! Generated protobuf and gRPC code for the live platform services.
//!
//! Sources live in `proto/` and are regenerated with `buf generate`.
//! The checked-in output under `src/generated/` must not be edited by hand.
//!
//! | package      | service                        |
//! |--------------|--------------------------------|
//! | `comment.v1` | `CommentService`               |
//! | `user.v1`    | `UserService`                  |
//! | `stream.v1`  | `StreamService`                |
//! | `db.v1`      | `DatabaseService` (downstream) |

mod generated;

pub use generated::*;
