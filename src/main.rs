fn main() {
    vault_admin::run();
}
