//! Property tests for cluster mapping and status rendering.

use proptest::prelude::*;
use workboard::api::{
    ClusterSnapshot, ConnectionSnapshot, DeviceSnapshot, DeviceTypeSnapshot, SystemStatusSnapshot,
};
use workboard::graph::{map_clusters, GraphView, RenderSurface, Theme, TopologySummary};
use workboard::status::{apply_snapshot, IndicatorBindings, IndicatorBoard};

fn device_strategy() -> impl Strategy<Value = DeviceSnapshot> {
    (
        "[a-z0-9]{1,6}",
        "[a-zA-Z ]{0,12}",
        prop_oneof!["server", "switch", "router"],
    )
        .prop_map(|(id, name, category)| DeviceSnapshot {
            id,
            name,
            device_type: DeviceTypeSnapshot {
                category: category.to_string(),
            },
        })
}

fn cluster_strategy() -> impl Strategy<Value = ClusterSnapshot> {
    (
        "[A-Za-z0-9-]{1,10}",
        prop::collection::vec(device_strategy(), 0..8),
    )
        .prop_flat_map(|(name, devices)| {
            let pool = devices.clone();
            let connections = if pool.is_empty() {
                Just(Vec::new()).boxed()
            } else {
                prop::collection::vec(
                    (
                        prop::sample::select(pool.clone()),
                        prop::sample::select(pool),
                        prop_oneof!["active", "planned"],
                    )
                        .prop_map(|(source, target, status)| ConnectionSnapshot {
                            source_device: source,
                            target_device: target,
                            status: status.to_string(),
                        }),
                    0..8,
                )
                .boxed()
            };
            (Just(name), Just(devices), connections)
        })
        .prop_map(|(name, devices, connections)| ClusterSnapshot {
            name,
            devices,
            connections,
        })
}

proptest! {
    /// One node per device and one edge per connection, in input order.
    #[test]
    fn prop_mapping_preserves_counts_and_order(
        clusters in prop::collection::vec(cluster_strategy(), 0..5)
    ) {
        let elements = map_clusters(&clusters);

        let devices: Vec<_> = clusters
            .iter()
            .flat_map(|c| c.devices.iter().map(move |d| (c, d)))
            .collect();
        prop_assert_eq!(elements.nodes.len(), devices.len());
        for (node, (cluster, device)) in elements.nodes.iter().zip(&devices) {
            prop_assert_eq!(&node.id, &device.id);
            prop_assert_eq!(&node.label, &device.name);
            prop_assert_eq!(&node.node_type, &device.device_type.category);
            prop_assert_eq!(&node.cluster, &cluster.name);
        }

        let connections: Vec<_> = clusters.iter().flat_map(|c| c.connections.iter()).collect();
        prop_assert_eq!(elements.edges.len(), connections.len());
        for (edge, conn) in elements.edges.iter().zip(&connections) {
            prop_assert_eq!(&edge.source, &conn.source_device.id);
            prop_assert_eq!(&edge.target, &conn.target_device.id);
            prop_assert_eq!(&edge.status, &conn.status);
        }
    }

    /// Rebuilding a view never keeps anything from the previous contents.
    #[test]
    fn prop_rebuild_depends_only_on_latest_snapshot(
        first in prop::collection::vec(cluster_strategy(), 0..4),
        second in prop::collection::vec(cluster_strategy(), 0..4),
    ) {
        let mut reused = GraphView::mount("cy", Theme::standard());
        let mut fresh = GraphView::mount("cy", Theme::standard());

        for element in map_clusters(&first).into_elements() {
            let _ = reused.add(element);
        }
        reused.clear();
        for element in map_clusters(&second).into_elements() {
            let _ = reused.add(element);
        }
        for element in map_clusters(&second).into_elements() {
            let _ = fresh.add(element);
        }

        prop_assert_eq!(reused.to_document(), fresh.to_document());
    }

    /// Summary counts always add up.
    #[test]
    fn prop_summary_is_consistent(clusters in prop::collection::vec(cluster_strategy(), 0..5)) {
        let summary = TopologySummary::from_clusters(&clusters);
        prop_assert_eq!(summary.clusters, clusters.len());
        prop_assert!(summary.servers + summary.switches <= summary.devices);
        prop_assert_eq!(
            summary.active_connections + summary.pending_connections,
            summary.connections
        );
    }

    /// Health bars always render as the value followed by a percent sign.
    #[test]
    fn prop_health_widths_are_percentages(db in 0u32..=100, api in 0u32..=100) {
        let snapshot = SystemStatusSnapshot {
            db_health: f64::from(db),
            api_health: f64::from(api),
            netbox_status: None,
            netbox_health: None,
        };
        let mut board = IndicatorBoard::new();
        apply_snapshot(&snapshot, &IndicatorBindings::default(), &mut board);

        let db_width = board.widget("db-health-bar").and_then(|w| w.width.clone());
        let api_width = board.widget("api-health-bar").and_then(|w| w.width.clone());
        prop_assert_eq!(db_width, Some(format!("{}%", db)));
        prop_assert_eq!(api_width, Some(format!("{}%", api)));
    }
}
