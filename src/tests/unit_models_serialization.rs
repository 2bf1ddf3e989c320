use crate::features::baked_goods::model::BakedGood;
use crate::features::bakeries::model::Bakery;
use crate::features::bakeries::{bakery_to_json, goods_by_owner};

fn croissant() -> BakedGood {
    BakedGood {
        id: 1,
        name: "Croissant".to_string(),
        price: 3.5,
        bakery_id: 1,
    }
}

// the wire shape of a baked good is fixed field for field; clients
// depend on these exact keys in this exact order
#[test]
fn test_baked_good_json_contract() {
    let json = serde_json::to_string(&croissant()).unwrap();

    assert_eq!(
        json,
        r#"{"id":1,"name":"Croissant","price":3.5,"bakery_id":1}"#
    );
}

// a bakery serializes as its row plus the goods nested flat inside it
#[test]
fn test_bakery_json_contract() {
    let bakery = Bakery {
        id: 1,
        name: "Flour Power".to_string(),
    };

    let json = serde_json::to_string(&bakery_to_json(&bakery, vec![croissant()])).unwrap();

    assert_eq!(
        json,
        r#"{"id":1,"name":"Flour Power","baked_goods":[{"id":1,"name":"Croissant","price":3.5,"bakery_id":1}]}"#
    );
}

// a bakery with nothing to sell still carries the (empty) goods list
#[test]
fn test_bakery_json_contract_no_goods() {
    let bakery = Bakery {
        id: 2,
        name: "Knead to Know".to_string(),
    };

    let json = serde_json::to_string(&bakery_to_json(&bakery, Vec::new())).unwrap();

    assert_eq!(json, r#"{"id":2,"name":"Knead to Know","baked_goods":[]}"#);
}

// grouping splits one table-wide fetch into per-owner buckets
#[test]
fn test_goods_by_owner_grouping() {
    let goods = vec![
        BakedGood {
            id: 1,
            name: "Croissant".to_string(),
            price: 3.5,
            bakery_id: 1,
        },
        BakedGood {
            id: 2,
            name: "Baguette".to_string(),
            price: 4.0,
            bakery_id: 2,
        },
        BakedGood {
            id: 3,
            name: "Roll".to_string(),
            price: 1.25,
            bakery_id: 1,
        },
    ];

    let grouped = goods_by_owner(goods);

    assert_eq!(grouped.len(), 2);
    assert_eq!(grouped[&1].len(), 2);
    assert_eq!(grouped[&2].len(), 1);
    assert_eq!(grouped[&1][1].name, "Roll");
}
