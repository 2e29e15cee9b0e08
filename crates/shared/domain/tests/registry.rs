use podium_domain::registry::{FeatureSlice, InitializedSlice};
use std::any::{Any, TypeId};

#[derive(Debug)]
struct Calendar;

impl FeatureSlice for Calendar {
    fn name(&self) -> &'static str {
        "calendar"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug)]
struct Other;

impl FeatureSlice for Other {
    fn name(&self) -> &'static str {
        "other"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[test]
fn initialized_slice_records_type_and_name() {
    let slice = InitializedSlice::new(Calendar);
    assert_eq!(slice.id, TypeId::of::<Calendar>());
    assert_eq!(slice.name, "calendar");
    assert!(slice.downcast_ref::<Calendar>().is_some());
    assert!(slice.downcast_ref::<Other>().is_none());
}
