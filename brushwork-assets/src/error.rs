use crate::AssetId;

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("unknown asset: {0}")]
    UnknownAsset(AssetId),
}
