use streetmap::{DisjointVertexSets, Graph, Intersection, VertexIdx};

const EPSILON: f64 = 1e-9;

fn build(vertices: &[(&str, f64, f64)], roads: &[(&str, &str, &str)]) -> Graph {
    let mut graph = Graph::new();
    for &(id, lat, lon) in vertices {
        graph
            .add_intersection(Intersection::new(id, lat, lon).expect("finite coordinates"))
            .expect("unique id");
    }
    for &(id, start, end) in roads {
        graph.add_road(id, start, end).expect("known endpoints");
    }
    graph
}

/// Five intersections and six roads.
fn five_towns() -> Graph {
    build(
        &[
            ("A", 50.0, 50.0),
            ("B", 51.0, 51.0),
            ("C", 49.0, 49.0),
            ("D", 47.0, 48.0),
            ("E", 51.0, 50.0),
        ],
        &[
            ("i1", "A", "C"),
            ("i2", "A", "B"),
            ("i3", "B", "E"),
            ("i4", "D", "C"),
            ("i5", "B", "D"),
            ("i6", "C", "E"),
        ],
    )
}

/// Lightest simple path weight between two vertices by exhaustive DFS.
fn brute_force_distance(graph: &Graph, from: VertexIdx, to: VertexIdx) -> Option<f64> {
    fn walk(
        graph: &Graph,
        at: VertexIdx,
        to: VertexIdx,
        on_path: &mut Vec<bool>,
        so_far: f64,
        best: &mut Option<f64>,
    ) {
        if at == to {
            if best.map_or(true, |b| so_far < b) {
                *best = Some(so_far);
            }
            return;
        }
        for adjacent in graph.neighbours(at) {
            if on_path[adjacent.neighbor] {
                continue;
            }
            on_path[adjacent.neighbor] = true;
            let weight = graph.road(adjacent.road).weight();
            walk(graph, adjacent.neighbor, to, on_path, so_far + weight, best);
            on_path[adjacent.neighbor] = false;
        }
    }

    let mut on_path = vec![false; graph.vertex_count()];
    on_path[from] = true;
    let mut best = None;
    walk(graph, from, to, &mut on_path, 0.0, &mut best);
    best
}

#[test]
fn picks_the_globally_shortest_of_three_candidates() {
    let graph = five_towns();
    let route = graph.directions("B", "C").unwrap().expect("B and C are connected");

    let b = graph.index_of("B").unwrap();
    let c = graph.index_of("C").unwrap();
    let expected = brute_force_distance(&graph, b, c).unwrap();
    assert!((route.distance() - expected).abs() < EPSILON);
    assert_eq!(route.ids(&graph), vec!["B", "A", "C"]);

    let via = |ids: [&str; 3]| -> f64 {
        ids.windows(2)
            .map(|pair| {
                let from = graph.get(pair[0]).unwrap().location();
                let to = graph.get(pair[1]).unwrap().location();
                from.distance_to(&to, graph.unit())
            })
            .sum()
    };
    let candidates = [via(["B", "A", "C"]), via(["B", "D", "C"]), via(["B", "E", "C"])];
    let shortest = candidates.iter().copied().fold(f64::INFINITY, f64::min);
    assert!((route.distance() - shortest).abs() < EPSILON);
}

#[test]
fn route_is_simple_and_sums_to_reported_distance() {
    let graph = five_towns();
    let ids = ["A", "B", "C", "D", "E"];
    for start in ids {
        for end in ids {
            let route = graph.directions(start, end).unwrap().unwrap();
            assert_eq!(graph.vertex(route.destination()).id(), end);
            assert_eq!(graph.vertex(route.source()).id(), start);

            let mut seen = route.vertices().to_vec();
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(seen.len(), route.len(), "{start}->{end} revisits a vertex");

            assert!((route.road_weight(&graph) - route.distance()).abs() < EPSILON);
            let brute = brute_force_distance(
                &graph,
                graph.index_of(start).unwrap(),
                graph.index_of(end).unwrap(),
            )
            .unwrap();
            assert!((route.distance() - brute).abs() < EPSILON, "{start}->{end}");
        }
    }
}

#[test]
fn settled_distances_never_decrease() {
    let graph = five_towns();
    let search = graph.shortest_path("D", "E").unwrap();
    assert!(search.found());
    let distances: Vec<f64> = search.settled().iter().map(|&(_, d)| d).collect();
    assert!(distances.windows(2).all(|w| w[0] <= w[1]), "{distances:?}");
}

#[test]
fn disjoint_components_report_not_found() {
    let graph = build(
        &[
            ("A", 0.0, 0.0),
            ("B", 0.0, 1.0),
            ("C", 10.0, 10.0),
            ("D", 10.0, 11.0),
        ],
        &[("ab", "A", "B"), ("cd", "C", "D")],
    );
    let search = graph.shortest_path("A", "D").unwrap();
    assert!(!search.found());
    assert!(graph.directions("A", "D").unwrap().is_none());
    assert!(graph.directions("D", "C").unwrap().is_some());
}

#[test]
fn spanning_tree_of_five_towns_is_minimal() {
    let graph = five_towns();
    let forest = graph.minimum_spanning_forest();
    assert_eq!(forest.len(), graph.vertex_count() - 1);
    assert!(forest.is_spanning_tree());

    // No cycles among the accepted roads.
    let mut sets = DisjointVertexSets::new(graph.vertex_count());
    for &road in forest.roads() {
        let (a, b) = graph.road(road).endpoints();
        assert!(sets.union(a, b), "road {} closes a cycle", graph.road(road).id());
    }

    // Compare against every spanning tree the graph has.
    let road_count = graph.road_count();
    let needed = graph.vertex_count() - 1;
    let mut trees = 0;
    for mask in 0_u32..(1 << road_count) {
        if mask.count_ones() as usize != needed {
            continue;
        }
        let mut sets = DisjointVertexSets::new(graph.vertex_count());
        let mut weight = 0.0;
        let mut acyclic = true;
        for road in (0..road_count).filter(|r| mask & (1 << r) != 0) {
            let (a, b) = graph.road(road).endpoints();
            acyclic &= sets.union(a, b);
            weight += graph.road(road).weight();
        }
        if acyclic && sets.partitions() == 1 {
            trees += 1;
            assert!(forest.total_weight() <= weight + EPSILON);
        }
    }
    assert!(trees > 1);
}

#[test]
fn spanning_forest_is_repeatable() {
    let graph = five_towns();
    let first = graph.minimum_spanning_forest();
    let second = graph.minimum_spanning_forest();
    assert_eq!(first.roads(), second.roads());
    assert_eq!(first.total_weight(), second.total_weight());
}

#[test]
fn grid_distances_match_brute_force() {
    // 4x4 grid with the diagonals of every other cell.
    let mut vertices = Vec::new();
    for row in 0..4 {
        for col in 0..4 {
            vertices.push((format!("v{row}{col}"), 40.0 + row as f64 * 0.1, -75.0 + col as f64 * 0.13));
        }
    }
    let mut roads = Vec::new();
    for row in 0..4 {
        for col in 0..4 {
            if col + 1 < 4 {
                roads.push((format!("h{row}{col}"), format!("v{row}{col}"), format!("v{row}{}", col + 1)));
            }
            if row + 1 < 4 {
                roads.push((format!("w{row}{col}"), format!("v{row}{col}"), format!("v{}{col}", row + 1)));
            }
            if row + 1 < 4 && col + 1 < 4 && (row + col) % 2 == 0 {
                roads.push((
                    format!("d{row}{col}"),
                    format!("v{row}{col}"),
                    format!("v{}{}", row + 1, col + 1),
                ));
            }
        }
    }

    let mut graph = Graph::new();
    for (id, lat, lon) in &vertices {
        graph
            .add_intersection(Intersection::new(id.as_str(), *lat, *lon).unwrap())
            .unwrap();
    }
    for (id, start, end) in &roads {
        graph.add_road(id.as_str(), start, end).unwrap();
    }

    for target in ["v33", "v03", "v30", "v12"] {
        let route = graph.directions("v00", target).unwrap().unwrap();
        let brute = brute_force_distance(
            &graph,
            graph.index_of("v00").unwrap(),
            graph.index_of(target).unwrap(),
        )
        .unwrap();
        assert!((route.distance() - brute).abs() < EPSILON, "v00->{target}");
    }

    let forest = graph.minimum_spanning_forest();
    assert_eq!(forest.len(), 15);
}
