//! Van assignments. Highways run fastest, local roads slowest; a few
//! routes carry two vans for density.

use super::IndicatorDef;

pub const INDICATOR_DEFS: &[IndicatorDef] = &[
    IndicatorDef {
        id: "van-1",
        route_id: "highway-1",
        base_speed: 48.0,
        size: 3.5,
        opacity: 1.0,
        start_offset: 0.1,
    },
    IndicatorDef {
        id: "van-2",
        route_id: "highway-2",
        base_speed: 50.0,
        size: 3.2,
        opacity: 1.0,
        start_offset: 0.3,
    },
    IndicatorDef {
        id: "van-3",
        route_id: "highway-3",
        base_speed: 45.0,
        size: 3.4,
        opacity: 1.0,
        start_offset: 0.6,
    },
    IndicatorDef {
        id: "van-18",
        route_id: "highway-1",
        base_speed: 52.0,
        size: 3.3,
        opacity: 1.0,
        start_offset: 0.55,
    },
    IndicatorDef {
        id: "van-4",
        route_id: "arterial-1",
        base_speed: 60.0,
        size: 3.0,
        opacity: 1.0,
        start_offset: 0.05,
    },
    IndicatorDef {
        id: "van-5",
        route_id: "arterial-2",
        base_speed: 62.0,
        size: 2.8,
        opacity: 1.0,
        start_offset: 0.4,
    },
    IndicatorDef {
        id: "van-6",
        route_id: "arterial-3",
        base_speed: 58.0,
        size: 3.1,
        opacity: 1.0,
        start_offset: 0.7,
    },
    IndicatorDef {
        id: "van-7",
        route_id: "arterial-4",
        base_speed: 60.0,
        size: 2.9,
        opacity: 1.0,
        start_offset: 0.2,
    },
    IndicatorDef {
        id: "van-8",
        route_id: "arterial-6",
        base_speed: 65.0,
        size: 3.0,
        opacity: 1.0,
        start_offset: 0.55,
    },
    IndicatorDef {
        id: "van-13",
        route_id: "arterial-5",
        base_speed: 58.0,
        size: 3.0,
        opacity: 1.0,
        start_offset: 0.35,
    },
    IndicatorDef {
        id: "van-14",
        route_id: "arterial-7",
        base_speed: 62.0,
        size: 2.9,
        opacity: 1.0,
        start_offset: 0.15,
    },
    IndicatorDef {
        id: "van-15",
        route_id: "arterial-8",
        base_speed: 60.0,
        size: 3.0,
        opacity: 1.0,
        start_offset: 0.45,
    },
    IndicatorDef {
        id: "van-9",
        route_id: "local-1",
        base_speed: 80.0,
        size: 2.6,
        opacity: 1.0,
        start_offset: 0.15,
    },
    IndicatorDef {
        id: "van-10",
        route_id: "local-5",
        base_speed: 75.0,
        size: 2.7,
        opacity: 1.0,
        start_offset: 0.5,
    },
    IndicatorDef {
        id: "van-16",
        route_id: "local-2",
        base_speed: 78.0,
        size: 2.7,
        opacity: 1.0,
        start_offset: 0.3,
    },
    IndicatorDef {
        id: "van-17",
        route_id: "local-3",
        base_speed: 82.0,
        size: 2.6,
        opacity: 1.0,
        start_offset: 0.6,
    },
    IndicatorDef {
        id: "van-11",
        route_id: "connector-1",
        base_speed: 68.0,
        size: 2.8,
        opacity: 1.0,
        start_offset: 0.3,
    },
    IndicatorDef {
        id: "van-12",
        route_id: "connector-2",
        base_speed: 70.0,
        size: 2.7,
        opacity: 1.0,
        start_offset: 0.65,
    },
    IndicatorDef {
        id: "van-22",
        route_id: "cross-2",
        base_speed: 68.0,
        size: 2.9,
        opacity: 1.0,
        start_offset: 0.4,
    },
    IndicatorDef {
        id: "van-23",
        route_id: "local-4",
        base_speed: 78.0,
        size: 2.7,
        opacity: 1.0,
        start_offset: 0.2,
    },
    IndicatorDef {
        id: "van-24",
        route_id: "connector-3",
        base_speed: 70.0,
        size: 2.8,
        opacity: 1.0,
        start_offset: 0.35,
    },
    IndicatorDef {
        id: "van-25",
        route_id: "arterial-5",
        base_speed: 62.0,
        size: 3.0,
        opacity: 1.0,
        start_offset: 0.7,
    },
];
