use crate::core::{CustomerPayload, DeviceRecord, Storage};
use crate::utils::error::Result;
use std::path::PathBuf;

/// `VanMoof_<device type>_<frame number>.json`, with spaces and path
/// separators turned into underscores.
pub fn payload_file_name(device_type: &str, frame_number: &str) -> String {
    let clean = |value: &str| value.replace([' ', '/', '\\'], "_");
    format!("VanMoof_{}_{}.json", clean(device_type), clean(frame_number))
}

/// Writes the raw payload into the storage's output directory, overwriting
/// any earlier file for the same bike.
pub async fn persist<S: Storage>(
    storage: &S,
    payload: &CustomerPayload,
    record: &DeviceRecord,
) -> Result<PathBuf> {
    let file_name = payload_file_name(&record.device_type, &record.frame_number);
    tracing::debug!("Writing {} bytes to {}", payload.raw().len(), file_name);

    let path = storage.write_file(&file_name, payload.raw()).await?;
    tracing::info!("Saved customer data to {}", path.display());
    Ok(path)
}
