use crate::domain::{CommerceOrder, PaymentData, PaymentMethodOptions, ServiceName};
use crate::ports::{AlterContext, PaymentDataAlter, PaymentMethodOptionsAlter};
use std::sync::Arc;
use tracing::{debug, info};

/// 已注册的扩展及其权重
struct Registered<T: ?Sized> {
    weight: i32,
    extension: Arc<T>,
}

/// 扩展注册表构建器（启动时使用）
#[derive(Default)]
pub struct ExtensionRegistryBuilder {
    options_alters: Vec<Registered<dyn PaymentMethodOptionsAlter>>,
    data_alters: Vec<Registered<dyn PaymentDataAlter>>,
    enabled: Option<Vec<String>>,
}

impl ExtensionRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 只保留指定名称的扩展，None 表示全部保留
    pub fn enabled(mut self, names: Option<Vec<String>>) -> Self {
        self.enabled = names;
        self
    }

    /// 注册支付方式选项扩展，权重小的先执行
    pub fn payment_method_options_alter(
        mut self,
        extension: Arc<dyn PaymentMethodOptionsAlter>,
        weight: i32,
    ) -> Self {
        self.options_alters.push(Registered { weight, extension });
        self
    }

    /// 注册支付数据扩展，权重小的先执行
    pub fn payment_data_alter(mut self, extension: Arc<dyn PaymentDataAlter>, weight: i32) -> Self {
        self.data_alters.push(Registered { weight, extension });
        self
    }

    pub fn build(self) -> ExtensionRegistry {
        let enabled = self.enabled;
        let is_enabled = |name: &str| match &enabled {
            Some(names) => names.iter().any(|n| n == name),
            None => true,
        };

        let mut options_alters: Vec<_> = self
            .options_alters
            .into_iter()
            .filter(|r| {
                let keep = is_enabled(r.extension.name());
                if !keep {
                    info!(extension = r.extension.name(), "Skipping disabled extension");
                }
                keep
            })
            .collect();

        let mut data_alters: Vec<_> = self
            .data_alters
            .into_iter()
            .filter(|r| {
                let keep = is_enabled(r.extension.name());
                if !keep {
                    info!(extension = r.extension.name(), "Skipping disabled extension");
                }
                keep
            })
            .collect();

        // 稳定排序：权重相同时保持注册顺序
        options_alters.sort_by_key(|r| r.weight);
        data_alters.sort_by_key(|r| r.weight);

        let registry = ExtensionRegistry {
            options_alters,
            data_alters,
        };

        info!(
            payment_method_options_alters = ?registry.payment_method_options_alter_names(),
            payment_data_alters = ?registry.payment_data_alter_names(),
            "Built extension registry"
        );

        registry
    }
}

/// 扩展注册表：每个扩展点一个有序列表，构建后不可变
pub struct ExtensionRegistry {
    options_alters: Vec<Registered<dyn PaymentMethodOptionsAlter>>,
    data_alters: Vec<Registered<dyn PaymentDataAlter>>,
}

impl ExtensionRegistry {
    pub fn builder() -> ExtensionRegistryBuilder {
        ExtensionRegistryBuilder::new()
    }

    /// 按顺序执行所有支付方式选项扩展
    pub fn alter_payment_method_options(
        &self,
        payment_method_options: &mut PaymentMethodOptions,
        ctx: &AlterContext,
    ) {
        for registered in &self.options_alters {
            debug!(
                extension = registered.extension.name(),
                options = payment_method_options.len(),
                "Invoking payment method options alter"
            );
            registered.extension.alter(payment_method_options, ctx);
        }
    }

    /// 按顺序执行所有支付数据扩展
    pub fn alter_payment_data(
        &self,
        data: &mut PaymentData,
        sbpayment_service_name: &ServiceName,
        order: &CommerceOrder,
        ctx: &AlterContext,
    ) {
        for registered in &self.data_alters {
            debug!(
                extension = registered.extension.name(),
                service = %sbpayment_service_name,
                order_id = order.order_id,
                "Invoking payment data alter"
            );
            registered
                .extension
                .alter(data, sbpayment_service_name, order, ctx);
        }
    }

    pub fn payment_method_options_alter_names(&self) -> Vec<&str> {
        self.options_alters
            .iter()
            .map(|r| r.extension.name())
            .collect()
    }

    pub fn payment_data_alter_names(&self) -> Vec<&str> {
        self.data_alters.iter().map(|r| r.extension.name()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Money, OrderStatus, PaymentDataValue};
    use crate::infrastructure::i18n::Translator;
    use std::sync::Mutex;

    fn ctx() -> AlterContext {
        AlterContext::new("Commerce", Arc::new(Translator::default()))
    }

    fn order() -> CommerceOrder {
        CommerceOrder::new(
            1,
            "1".to_string(),
            1,
            "buyer@example.jp".to_string(),
            OrderStatus::Checkout,
            Money::from_yen(100),
            Vec::new(),
        )
        .unwrap()
    }

    fn abc() -> PaymentMethodOptions {
        [("a", "A"), ("b", "B"), ("c", "C")].into_iter().collect()
    }

    /// 修改前记录看到的键
    struct Step {
        name: &'static str,
        mutation: fn(&mut PaymentMethodOptions),
        seen: Mutex<Vec<String>>,
    }

    impl Step {
        fn new(name: &'static str, mutation: fn(&mut PaymentMethodOptions)) -> Arc<Self> {
            Arc::new(Self {
                name,
                mutation,
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    impl PaymentMethodOptionsAlter for Step {
        fn name(&self) -> &str {
            self.name
        }

        fn alter(&self, options: &mut PaymentMethodOptions, _ctx: &AlterContext) {
            *self.seen.lock().unwrap() = options.keys().map(String::from).collect();
            (self.mutation)(options);
        }
    }

    fn add_d(options: &mut PaymentMethodOptions) {
        options.insert("d", "D");
    }

    fn drop_a(options: &mut PaymentMethodOptions) {
        options.remove("a");
    }

    fn rename_d(options: &mut PaymentMethodOptions) {
        options.insert("d", "Dee");
    }

    fn drop_missing(options: &mut PaymentMethodOptions) {
        options.remove("missing");
    }

    #[test]
    fn test_options_alters_run_in_registration_order() {
        let first = Step::new("first", add_d);
        let second = Step::new("second", drop_a);
        let third = Step::new("third", rename_d);

        let registry = ExtensionRegistry::builder()
            .payment_method_options_alter(first.clone(), 0)
            .payment_method_options_alter(second.clone(), 0)
            .payment_method_options_alter(third.clone(), 0)
            .build();

        let mut options = abc();
        registry.alter_payment_method_options(&mut options, &ctx());

        let mut expected = abc();
        add_d(&mut expected);
        drop_a(&mut expected);
        rename_d(&mut expected);

        assert_eq!(options, expected);
        assert_eq!(options.keys().collect::<Vec<_>>(), vec!["b", "c", "d"]);
        assert_eq!(options.get("d"), Some("Dee"));

        // 每个扩展都看到之前扩展的结果
        assert_eq!(*second.seen.lock().unwrap(), vec!["a", "b", "c", "d"]);
        assert_eq!(*third.seen.lock().unwrap(), vec!["b", "c", "d"]);
    }

    #[test]
    fn test_weight_orders_before_registration() {
        let registry = ExtensionRegistry::builder()
            .payment_method_options_alter(Step::new("late", add_d), 10)
            .payment_method_options_alter(Step::new("early", drop_a), -5)
            .payment_method_options_alter(Step::new("middle", drop_missing), 0)
            .payment_method_options_alter(Step::new("middle_two", rename_d), 0)
            .build();

        assert_eq!(
            registry.payment_method_options_alter_names(),
            vec!["early", "middle", "middle_two", "late"]
        );

        // rename_d 在 add_d 之前执行，"d" 最终为 "D"
        let mut options = abc();
        registry.alter_payment_method_options(&mut options, &ctx());
        assert_eq!(options.get("d"), Some("D"));
    }

    #[test]
    fn test_removing_missing_key_through_registry_is_noop() {
        let registry = ExtensionRegistry::builder()
            .payment_method_options_alter(Step::new("noop", drop_missing), 0)
            .build();

        let mut options = abc();
        registry.alter_payment_method_options(&mut options, &ctx());

        assert_eq!(options, abc());
    }

    #[test]
    fn test_disabled_extensions_are_skipped() {
        let registry = ExtensionRegistry::builder()
            .enabled(Some(vec!["second".to_string()]))
            .payment_method_options_alter(Step::new("first", add_d), 0)
            .payment_method_options_alter(Step::new("second", drop_a), 0)
            .build();

        assert_eq!(registry.payment_method_options_alter_names(), vec!["second"]);

        let mut options = abc();
        registry.alter_payment_method_options(&mut options, &ctx());
        assert!(!options.contains("d"));
        assert!(!options.contains("a"));
    }

    struct GuardedCustomerCode;

    impl PaymentDataAlter for GuardedCustomerCode {
        fn name(&self) -> &str {
            "guarded_customer_code"
        }

        fn alter(
            &self,
            data: &mut PaymentData,
            sbpayment_service_name: &ServiceName,
            order: &CommerceOrder,
            _ctx: &AlterContext,
        ) {
            if *sbpayment_service_name == "link_type" {
                data.insert("cust_code", format!("C{}", order.uid));
            }
        }
    }

    struct Overrider;

    impl PaymentDataAlter for Overrider {
        fn name(&self) -> &str {
            "overrider"
        }

        fn alter(
            &self,
            data: &mut PaymentData,
            _sbpayment_service_name: &ServiceName,
            _order: &CommerceOrder,
            _ctx: &AlterContext,
        ) {
            if data.contains("cust_code") {
                data.insert("cust_code", "last-wins");
            }
        }
    }

    #[test]
    fn test_data_alters_last_invoked_wins() {
        let registry = ExtensionRegistry::builder()
            .payment_data_alter(Arc::new(GuardedCustomerCode), 0)
            .payment_data_alter(Arc::new(Overrider), 0)
            .build();

        let mut data = PaymentData::new();
        registry.alter_payment_data(&mut data, &ServiceName::link_type(), &order(), &ctx());

        assert_eq!(
            data.get("cust_code"),
            Some(&PaymentDataValue::Text("last-wins".to_string()))
        );
    }

    #[test]
    fn test_data_alter_guard_mismatch_leaves_payload_unchanged() {
        let registry = ExtensionRegistry::builder()
            .payment_data_alter(Arc::new(GuardedCustomerCode), 0)
            .build();

        let mut data: PaymentData = [("amount", PaymentDataValue::from(100))]
            .into_iter()
            .collect();
        let before = serde_json::to_vec(&data).unwrap();

        registry.alter_payment_data(&mut data, &ServiceName::new("api_type"), &order(), &ctx());

        assert_eq!(serde_json::to_vec(&data).unwrap(), before);
    }

    #[test]
    fn test_empty_registry() {
        let registry = ExtensionRegistry::builder().build();
        let mut options = abc();
        registry.alter_payment_method_options(&mut options, &ctx());
        assert_eq!(options, abc());
        assert!(registry.payment_data_alter_names().is_empty());
    }
}
