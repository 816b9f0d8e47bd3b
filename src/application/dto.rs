use crate::domain::{PaymentData, PaymentMethodOptions, ServiceName};
use serde::{Deserialize, Serialize};

/// 单个支付方式选项
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentMethodOptionDto {
    /// 机器名
    pub id: String,

    /// 显示名称
    pub label: String,
}

/// 支付方式选项响应（数组保持显示顺序）
#[derive(Debug, Serialize, Deserialize)]
pub struct PaymentMethodOptionsResponse {
    pub options: Vec<PaymentMethodOptionDto>,
}

impl From<PaymentMethodOptions> for PaymentMethodOptionsResponse {
    fn from(options: PaymentMethodOptions) -> Self {
        Self {
            options: options
                .iter()
                .map(|(id, label)| PaymentMethodOptionDto {
                    id: id.to_string(),
                    label: label.to_string(),
                })
                .collect(),
        }
    }
}

/// 生成支付数据请求
#[derive(Debug, Deserialize)]
pub struct PaymentDataRequest {
    /// SBPS 子服务标识
    #[serde(default = "ServiceName::link_type")]
    pub service_name: ServiceName,

    /// 选择的支付方式机器名
    pub pay_method: String,
}

/// 支付数据响应
#[derive(Debug, Serialize)]
pub struct PaymentDataResponse {
    /// 订单ID
    pub order_id: i64,

    /// SBPS 子服务标识
    pub service_name: ServiceName,

    /// 支付数据（按字段顺序）
    pub data: PaymentData,
}

/// 错误响应
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: String, message: String) -> Self {
        Self { error, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_response_keeps_order() {
        let options: PaymentMethodOptions = [("webcvs", "Convenience store"), ("credit", "Credit card")]
            .into_iter()
            .collect();

        let response = PaymentMethodOptionsResponse::from(options);
        let json = serde_json::to_string(&response).unwrap();

        assert_eq!(
            json,
            r#"{"options":[{"id":"webcvs","label":"Convenience store"},{"id":"credit","label":"Credit card"}]}"#
        );
    }

    #[test]
    fn test_payment_data_request_defaults_to_link_type() {
        let request: PaymentDataRequest = serde_json::from_str(r#"{"pay_method":"credit"}"#).unwrap();
        assert!(request.service_name.is_link_type());
    }
}
