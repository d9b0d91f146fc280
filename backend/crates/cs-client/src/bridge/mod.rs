pub mod cross_device_bridge;
