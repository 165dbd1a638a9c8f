use neo_primitives::UInt160;
use num_bigint::BigInt;
use serde_json::{Map, Value};

/// NEP-17 balances of one address (`getnep17balances`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcNep17Balances {
    pub user_script_hash: String,
    pub balances: Vec<RpcNep17Balance>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcNep17Balance {
    pub asset_hash: UInt160,
    pub amount: BigInt,
    pub last_updated_block: u32,
}

impl RpcNep17Balances {
    pub fn from_json(json: &Map<String, Value>) -> Result<Self, String> {
        let user_script_hash = json
            .get("address")
            .and_then(Value::as_str)
            .ok_or("Missing or invalid 'address' field")?
            .to_string();

        let balances = match json.get("balance") {
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| {
                    item.as_object()
                        .ok_or_else(|| "Balance entry is not an object".to_string())
                        .and_then(RpcNep17Balance::from_json)
                })
                .collect::<Result<Vec<_>, _>>()?,
            _ => Vec::new(),
        };

        Ok(Self {
            user_script_hash,
            balances,
        })
    }

    /// Sum of the entries for `asset`; zero when the asset is absent.
    pub fn amount_of(&self, asset: &UInt160) -> BigInt {
        self.balances
            .iter()
            .filter(|balance| balance.asset_hash == *asset)
            .map(|balance| &balance.amount)
            .sum()
    }
}

impl RpcNep17Balance {
    pub fn from_json(json: &Map<String, Value>) -> Result<Self, String> {
        let asset = json
            .get("assethash")
            .and_then(Value::as_str)
            .ok_or("Missing or invalid 'assethash' field")?;
        let asset_hash =
            UInt160::parse(asset).map_err(|err| format!("Invalid asset hash {asset}: {err}"))?;

        let amount = match json.get("amount") {
            Some(Value::String(s)) => s
                .parse::<BigInt>()
                .map_err(|_| format!("Invalid amount: {s}"))?,
            Some(Value::Number(n)) => n
                .as_i64()
                .map(BigInt::from)
                .ok_or_else(|| format!("Invalid amount: {n}"))?,
            _ => return Err("Missing or invalid 'amount' field".to_string()),
        };

        let last_updated_block = json
            .get("lastupdatedblock")
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or_default();

        Ok(Self {
            asset_hash,
            amount,
            last_updated_block,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_and_sums_by_exact_hash() {
        let json = json!({
            "address": "NXV7ZhHiyM1aHXwpVsRZC6BwNFP2jghXAq",
            "balance": [
                {"assethash": "0xd2a4cff31913016155e38e474a2c06d08be276cf", "amount": "3000000000", "lastupdatedblock": 12},
                {"assethash": "0xef4073a0f2b305a38ec4050e4d3d28bc40ea63f5", "amount": "100", "lastupdatedblock": 9}
            ]
        });
        let balances = RpcNep17Balances::from_json(json.as_object().unwrap()).unwrap();
        assert_eq!(balances.balances.len(), 2);

        let gas = UInt160::parse("0xd2a4cff31913016155e38e474a2c06d08be276cf").unwrap();
        assert_eq!(balances.amount_of(&gas), BigInt::from(3_000_000_000u64));
        assert_eq!(balances.amount_of(&UInt160::zero()), BigInt::from(0));
    }

    #[test]
    fn rejects_malformed_asset_hash() {
        let json = json!({
            "address": "N",
            "balance": [{"assethash": "d2a4cf", "amount": "1", "lastupdatedblock": 1}]
        });
        assert!(RpcNep17Balances::from_json(json.as_object().unwrap()).is_err());
    }
}
