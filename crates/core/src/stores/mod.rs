pub mod cloudsearch;
pub mod s3;

pub use cloudsearch::CloudSearchStore;
pub use s3::S3Store;
