use crate::core::{CustomerPayload, DeviceRecord};
use crate::utils::error::{Result, VanMoofError};
use serde_json::Value;

/// Reads a non-empty string at `path` below `object`.
fn non_empty_str<'a>(object: &'a Value, path: &[&str]) -> Option<&'a str> {
    path.iter()
        .try_fold(object, |node, key| node.get(key))
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
}

/// Navigates `data.bikeDetails` and builds the record for the first bike.
///
/// Only the first entry is considered; accounts with several bikes get the
/// first one. Either all five fields are present and non-empty or no record
/// is produced.
pub fn extract(payload: &CustomerPayload) -> Result<DeviceRecord> {
    let result = extract_first_bike(payload.value());
    if result.is_err() {
        tracing::error!(payload = %payload.value(), "unusable customer data");
    }
    result
}

fn extract_first_bike(payload: &Value) -> Result<DeviceRecord> {
    let bike = match payload.get("data").and_then(|data| data.get("bikeDetails")) {
        None => return Err(VanMoofError::data("No bike details in response")),
        Some(Value::Array(bikes)) => bikes
            .first()
            .ok_or_else(|| VanMoofError::data("Bike details list is empty"))?,
        Some(_) => return Err(VanMoofError::data("Bike details is not a list")),
    };

    let device_type = non_empty_str(bike, &["name"]);
    let frame_number = non_empty_str(bike, &["frameNumber"]);
    let mac_address = non_empty_str(bike, &["macAddress"]);
    let encryption_key = non_empty_str(bike, &["key", "encryptionKey"]);
    let passcode = non_empty_str(bike, &["key", "passcode"]);

    match (device_type, frame_number, mac_address, encryption_key, passcode) {
        (
            Some(device_type),
            Some(frame_number),
            Some(mac_address),
            Some(encryption_key),
            Some(passcode),
        ) => Ok(DeviceRecord {
            device_type: device_type.to_string(),
            frame_number: frame_number.to_string(),
            mac_address: mac_address.to_string(),
            encryption_key: encryption_key.to_string(),
            passcode: passcode.to_string(),
        }),
        _ => {
            let fields = [
                ("name", device_type),
                ("frameNumber", frame_number),
                ("macAddress", mac_address),
                ("key.encryptionKey", encryption_key),
                ("key.passcode", passcode),
            ]
            .into_iter()
            .filter(|(_, value)| value.is_none())
            .map(|(field, _)| field)
            .collect();
            Err(VanMoofError::MissingFieldsError { fields })
        }
    }
}
