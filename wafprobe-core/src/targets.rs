// Built-in request set: a few ordinary pages followed by patterns a WAF
// managed rule group is expected to block.

use wafprobe_scanner::ProbeTarget;

const DEFAULT_TARGETS: [(&str, &str); 9] = [
    ("/board_list.php?boardIndex=6", "normal board listing"),
    ("/index.html", "main page"),
    ("/admin/", "admin page access (legitimate)"),
    ("/wp-admin/admin-ajax.php", "WordPress admin AJAX request (WAF block check)"),
    ("/etc/passwd", "Linux system file access (path traversal)"),
    ("/phpmyadmin/", "phpMyAdmin page access"),
    ("/select/**/from/**/users", "SQL injection pattern (WAF detection check)"),
    ("/wp-config.php.bak", "backup file access attempt"),
    ("/index.php?cmd=system('ls -al');", "command injection attempt (WAF detection check)"),
];

/// The fixed, ordered list of paths every run requests
pub fn default_targets() -> Vec<ProbeTarget> {
    DEFAULT_TARGETS
        .iter()
        .map(|(path, label)| ProbeTarget::new(*path, *label))
        .collect()
}
