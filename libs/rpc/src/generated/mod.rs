// @generated
// This file wires up buf-generated protobuf code
// Note: The prost files already include!() the tonic files automatically

pub mod comment {
    pub mod v1 {
        include!("comment.v1.rs");
        // comment.v1.tonic.rs is auto-included by comment.v1.rs
    }
}

pub mod db {
    pub mod v1 {
        include!("db.v1.rs");
        // db.v1.tonic.rs is auto-included by db.v1.rs
    }
}

pub mod stream {
    pub mod v1 {
        include!("stream.v1.rs");
        // stream.v1.tonic.rs is auto-included by stream.v1.rs
    }
}

pub mod user {
    pub mod v1 {
        include!("user.v1.rs");
        // user.v1.tonic.rs is auto-included by user.v1.rs
    }
}
