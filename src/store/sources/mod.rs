pub mod local;

#[cfg(feature = "remote-source")]
pub mod remote;

pub use local::LocalDataSource;

#[cfg(feature = "remote-source")]
pub use remote::RemoteDataSource;
