/// The type to represent flowpack results.
pub type FlowpackResult<T = ()> = anyhow::Result<T>;
