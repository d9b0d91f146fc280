pub mod identity_provisioner;
