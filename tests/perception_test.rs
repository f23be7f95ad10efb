use perception_common::integration::postprocess::sort_by_score;
use perception_common::{
    BoundingBox, Detection, DetectionBuilder, LabelTable, Parsing, Perception, PerceptionKind,
    PerceptionType,
};

const LABELS: [&str; 4] = ["person", "bicycle", "car", "cat"];

#[test]
fn test_detection_wire_format() {
    let det = Detection::new(3, 0.5, BoundingBox::new(0.0, 0.0, 10.0, 10.0)).with_class_name("cat");
    let perception = Perception::from_detections(vec![det]);

    assert_eq!(
        perception.to_string(),
        r#"[{"bbox":[0.000000,0.000000,10.000000,10.000000],"prob":0.500000,"label":3,"class_name":"cat"}]"#
    );
}

#[test]
fn test_segmentation_wire_format() {
    let parsing = Parsing::new(4, 1, vec![1, -1, 0, 2]).unwrap();
    let perception = Perception::from_parsing(parsing);
    assert_eq!(perception.to_string(), "[1,-1,0,2]");
}

#[test]
fn test_default_renders_empty_list() {
    assert_eq!(Perception::default().to_string(), "[]");
    assert_eq!(Perception::from_detections(Vec::new()).to_string(), "[]");
}

#[test]
fn test_detection_list_is_length_preserving() {
    let labels = LabelTable::new(&LABELS);
    let dets: Vec<Detection<'_>> = (0..3)
        .map(|i| {
            DetectionBuilder::new()
                .tlwh(i as f32, 0.0, 5.0, 5.0)
                .score(0.3 * i as f32)
                .id(i)
                .label_table(labels)
                .build()
        })
        .collect();

    let rendered = Perception::from_detections(dets).to_string();
    assert_eq!(rendered.matches(r#"{"bbox":"#).count(), 3);
    assert_eq!(rendered.matches("},{").count(), 2);
    assert!(rendered.ends_with(r#""class_name":"car"}]"#));
    assert!(!rendered.contains(",]"));
}

#[test]
fn test_rendering_is_idempotent() {
    let perception = Perception::from_detections(vec![
        Detection::new(1, 0.75, BoundingBox::new(-1.5, 2.0, -3.0, 4.0)).with_class_name("bicycle"),
    ]);
    assert_eq!(perception.to_string(), perception.to_string());
    assert_eq!(
        perception.to_string(),
        r#"[{"bbox":[-1.500000,2.000000,-3.000000,4.000000],"prob":0.750000,"label":1,"class_name":"bicycle"}]"#
    );
}

#[test]
fn test_caller_ranks_before_rendering() {
    let mut dets = vec![
        Detection::new(0, 0.2, BoundingBox::default()),
        Detection::new(1, 0.8, BoundingBox::default()),
    ];
    let unsorted = Perception::from_detections(dets.clone()).to_string();
    assert!(unsorted.find(r#""label":0"#) < unsorted.find(r#""label":1"#));

    sort_by_score(&mut dets);
    assert!(dets[0].is_greater(&dets[1]));
    let sorted = Perception::from_detections(dets).to_string();
    assert!(sorted.find(r#""label":1"#) < sorted.find(r#""label":0"#));
}

#[test]
fn test_perception_type_interop() {
    let perception = Perception::from_parsing(Parsing::default());
    assert_eq!(perception.perception_type().bits(), 4);
    assert!(matches!(perception.kind, PerceptionKind::Segmentation(_)));
    assert!(PerceptionType::try_from(2).is_err());
}
