//! ensure serde is working as expected

use super::*;

#[test]
fn test_serde() {
    #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq, Eq)]
    struct MyTypes {
        point: Point<i32>,
        bbox: BoundingBox<i32>,
        gid: GlyphId,
        tag: PointTag,
    }

    let my_instance = MyTypes {
        point: Point::new(-120, 640),
        bbox: BoundingBox {
            x_min: -10,
            y_min: -250,
            x_max: 1024,
            y_max: 900,
        },
        gid: GlyphId::new(69),
        tag: PointTag::OffCurve,
    };

    let dumped = serde_json::to_string(&my_instance).unwrap();
    let loaded: MyTypes = serde_json::from_str(&dumped).unwrap();
    assert_eq!(my_instance, loaded)
}
