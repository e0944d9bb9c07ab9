pub mod composite;
pub mod crop;
pub mod mask;
pub mod pipeline;
pub mod resize;
