//! GoPlus EOA address risk API shapes

use serde::{Deserialize, Serialize};

/// Indicator value marking a risk as present
pub const IN_RISK: &str = "1";
/// Indicator value marking a risk as absent
pub const NO_RISK: &str = "0";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoPlusRiskEoaAddressResponse {
    pub code: i32,
    pub message: String,
    pub result: Option<GoPlusAddressResult>,
}

impl GoPlusRiskEoaAddressResponse {
    pub fn ok(result: GoPlusAddressResult) -> Self {
        Self {
            code: 1,
            message: "ok".to_string(),
            result: Some(result),
        }
    }

    pub fn is_in_risk(&self) -> bool {
        self.code > 0 && self.result.as_ref().map_or(false, |r| r.is_in_risk())
    }
}

/// Risk indicators for one address, each `"1"`, `"0"` or absent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoPlusAddressResult {
    pub cybercrime: Option<String>,
    pub money_laundering: Option<String>,
    pub number_of_malicious_contracts_created: Option<String>,
    pub gas_abuse: Option<String>,
    pub financial_crime: Option<String>,
    pub darkweb_transactions: Option<String>,
    pub reinit: Option<String>,
    pub phishing_activities: Option<String>,
    pub fake_kyc: Option<String>,
    pub blacklist_doubt: Option<String>,
    pub fake_standard_interface: Option<String>,
    pub data_source: Option<String>,
    pub stealing_attack: Option<String>,
    pub blackmail_activities: Option<String>,
    pub sanctioned: Option<String>,
    pub malicious_mining_activities: Option<String>,
    pub mixer: Option<String>,
    pub honeypot_related_address: Option<String>,
}

impl GoPlusAddressResult {
    /// Every indicator set to `"0"`
    pub fn all_clear(data_source: &str) -> Self {
        let no = || Some(NO_RISK.to_string());
        Self {
            cybercrime: no(),
            money_laundering: no(),
            number_of_malicious_contracts_created: no(),
            gas_abuse: no(),
            financial_crime: no(),
            darkweb_transactions: no(),
            reinit: no(),
            phishing_activities: no(),
            fake_kyc: no(),
            blacklist_doubt: no(),
            fake_standard_interface: no(),
            data_source: Some(data_source.to_string()),
            stealing_attack: no(),
            blackmail_activities: no(),
            sanctioned: no(),
            malicious_mining_activities: no(),
            mixer: no(),
            honeypot_related_address: no(),
        }
    }

    fn indicators(&self) -> [(&'static str, &Option<String>); 17] {
        [
            ("cybercrime", &self.cybercrime),
            ("money_laundering", &self.money_laundering),
            (
                "number_of_malicious_contracts_created",
                &self.number_of_malicious_contracts_created,
            ),
            ("gas_abuse", &self.gas_abuse),
            ("financial_crime", &self.financial_crime),
            ("darkweb_transactions", &self.darkweb_transactions),
            ("reinit", &self.reinit),
            ("phishing_activities", &self.phishing_activities),
            ("fake_kyc", &self.fake_kyc),
            ("blacklist_doubt", &self.blacklist_doubt),
            ("fake_standard_interface", &self.fake_standard_interface),
            ("stealing_attack", &self.stealing_attack),
            ("blackmail_activities", &self.blackmail_activities),
            ("sanctioned", &self.sanctioned),
            ("malicious_mining_activities", &self.malicious_mining_activities),
            ("mixer", &self.mixer),
            ("honeypot_related_address", &self.honeypot_related_address),
        ]
    }

    /// Names of the indicators set to `"1"`, in field order
    pub fn risk_items(&self) -> Vec<&'static str> {
        self.indicators()
            .into_iter()
            .filter(|(_, value)| value.as_deref() == Some(IN_RISK))
            .map(|(name, _)| name)
            .collect()
    }

    pub fn is_in_risk(&self) -> bool {
        !self.risk_items().is_empty()
    }

    /// Risk item names joined by newlines
    pub fn risk_detail(&self) -> String {
        self.risk_items().join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_clear_has_no_risk() {
        let result = GoPlusAddressResult::all_clear("test");

        assert!(!result.is_in_risk());
        assert_eq!(result.risk_detail(), "");
        assert_eq!(result.data_source.as_deref(), Some("test"));
    }

    #[test]
    fn test_risk_items_in_field_order() {
        let result = GoPlusAddressResult {
            mixer: Some(IN_RISK.to_string()),
            cybercrime: Some(IN_RISK.to_string()),
            sanctioned: Some(NO_RISK.to_string()),
            ..Default::default()
        };

        assert_eq!(result.risk_items(), vec!["cybercrime", "mixer"]);
        assert_eq!(result.risk_detail(), "cybercrime\nmixer");
    }

    #[test]
    fn test_response_risk_requires_success_code() {
        let risky = GoPlusAddressResult {
            money_laundering: Some(IN_RISK.to_string()),
            ..Default::default()
        };

        let mut response = GoPlusRiskEoaAddressResponse::ok(risky);
        assert!(response.is_in_risk());

        response.code = 0;
        assert!(!response.is_in_risk());
    }

    #[test]
    fn test_wire_field_names_are_snake_case() {
        let json = serde_json::to_value(GoPlusAddressResult::all_clear("x")).unwrap();

        assert_eq!(json["money_laundering"], "0");
        assert_eq!(json["honeypot_related_address"], "0");
        assert_eq!(json["data_source"], "x");
    }
}
