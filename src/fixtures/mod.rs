// fixtures/mod.rs - Canned API responses
//
// Tests that talk to a mock of the remote API (or just decode its JSON)
// need realistic bodies. They are written once here, in the exact shape
// dummyjson.com returns, and reused by every test suite.

pub mod responses;

/// A canned response for one remote endpoint
pub trait ApiFixture {
    /// Path below the products root, e.g. `search` or `category/beauty`.
    /// Empty for the collection itself.
    fn path() -> &'static str;

    /// JSON body returned by the endpoint
    fn body() -> &'static str;

    /// Body parsed into any matching type
    fn parse<T: serde::de::DeserializeOwned>() -> serde_json::Result<T> {
        serde_json::from_str(Self::body())
    }
}
