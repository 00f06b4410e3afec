#[cfg(test)]
mod test {

    use crate::upstream::types::TransferRequest;

    #[test]
    fn omitted_fields_fall_back_to_upstream_defaults() {
        let transfer = TransferRequest::new("sku-1".into(), "5511999887766".into(), None, None);
        assert_eq!(transfer.send_value, 10);
        assert_eq!(transfer.sender_sms, "Simulação");
        assert!(transfer.distributor_ref.starts_with("tg-"));

        // the sender note is always present on the wire
        let body = serde_json::to_value(&transfer).expect("serialize");
        assert_eq!(body["SenderSms"], "Simulação");
        assert_eq!(body["SendValue"], 10);
    }
}
