use order_grouper::{
    GroupingError, InMemoryCollection, OrderDocument, OrderGrouper, QueryableCollection,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "order_grouper=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

fn order(product_id: &str, customer_id: &str) -> OrderDocument {
    OrderDocument {
        product_id: product_id.to_string(),
        customer_id: customer_id.to_string(),
    }
}

fn shop_collection() -> InMemoryCollection {
    InMemoryCollection::new(
        "dbs/shop/colls/orders",
        vec![
            order("KEYBOARD", "CUST-1"),
            order("MOUSE", "CUST-2"),
            order("KEYBOARD", "CUST-3"),
            order("MONITOR", "CUST-1"),
            // same customer reordering the same product stays duplicated
            order("KEYBOARD", "CUST-1"),
            order("KEYBOARD", "CUST-1"),
        ],
    )
}

#[tokio::test]
async fn groups_a_mixed_document_set() {
    init_tracing();
    let grouper = OrderGrouper::new(shop_collection());

    let product_ids = vec!["KEYBOARD".to_string(), "MOUSE".to_string()];
    let result = grouper.compute_grouped_orders(&product_ids).await.unwrap();

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].product_id, "KEYBOARD");
    assert_eq!(
        result[0].customer_ids,
        vec!["CUST-1", "CUST-3", "CUST-1", "CUST-1"]
    );
    assert_eq!(result[1].product_id, "MOUSE");
    assert_eq!(result[1].customer_ids, vec!["CUST-2"]);
}

#[tokio::test]
async fn product_with_no_orders_gets_an_empty_group() {
    init_tracing();
    let grouper = OrderGrouper::new(shop_collection());

    let product_ids = vec!["MONITOR".to_string(), "WEBCAM".to_string()];
    let result = grouper.compute_grouped_orders(&product_ids).await.unwrap();

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].customer_ids, vec!["CUST-1"]);
    assert_eq!(result[1].product_id, "WEBCAM");
    assert!(result[1].customer_ids.is_empty());
}

#[tokio::test]
async fn duplicate_product_ids_produce_independent_records() {
    init_tracing();
    let grouper = OrderGrouper::new(shop_collection());

    let product_ids = vec!["MOUSE".to_string(), "MOUSE".to_string()];
    let result = grouper.compute_grouped_orders(&product_ids).await.unwrap();

    assert_eq!(result.len(), 2);
    assert_eq!(result[0], result[1]);
    assert_eq!(result[0].customer_ids, vec!["CUST-2"]);
}

#[tokio::test]
async fn empty_input_is_a_success() {
    init_tracing();
    let grouper = OrderGrouper::new(shop_collection());

    let result = grouper.compute_grouped_orders(&[]).await.unwrap();

    assert!(result.is_empty());
}

/// A collection whose engine never accepts work; every query against it must
/// abort the whole computation.
struct RefusingCollection(InMemoryCollection);

#[async_trait::async_trait]
impl QueryableCollection for RefusingCollection {
    fn self_link(&self) -> String {
        // Hands out a scope token the inner collection will not honor.
        "dbs/elsewhere/colls/orders".to_string()
    }

    async fn query_documents(
        &self,
        self_link: &str,
        query: &order_grouper::ParameterizedQuery,
    ) -> order_grouper::QuerySubmission {
        self.0.query_documents(self_link, query).await
    }
}

#[tokio::test]
async fn scope_mismatch_rejection_aborts_with_no_partial_output() {
    init_tracing();
    let grouper = OrderGrouper::new(RefusingCollection(shop_collection()));

    let product_ids = vec!["KEYBOARD".to_string(), "MOUSE".to_string()];
    let err = grouper
        .compute_grouped_orders(&product_ids)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        GroupingError::QueryRejected { ref product_id } if product_id == "KEYBOARD"
    ));
    assert_eq!(
        err.to_string(),
        "Query was not accepted for product ID KEYBOARD"
    );
}
