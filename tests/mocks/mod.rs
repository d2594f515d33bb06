mod mock_reachability;

pub use mock_reachability::MockMailReachability;
