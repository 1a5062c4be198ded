//! Built-in lexicon rows, one table per language.
//!
//! Each row lists surface forms for one lemma. The first surface is the alias
//! used when rendering that lemma in the language, so it must be a plain
//! base form. A surface may appear in at most one row per language.

use crate::token::TokenType::{self, Action as A, Condition as C, Entity as E};

pub(crate) type Row = (TokenType, &'static str, &'static [&'static str]);

pub(crate) const EN: &[Row] = &[
    (A, "create", &["create", "creates", "created", "creating"]),
    (A, "add", &["add", "adds", "added", "adding"]),
    (A, "register", &["register", "registers", "registered", "registering", "sign up", "signed up"]),
    (A, "delete", &["delete", "deletes", "deleted", "deleting"]),
    (A, "remove", &["remove", "removes", "removed", "removing"]),
    (A, "drop", &["drop", "drops", "dropped", "dropping"]),
    (A, "update", &["update", "updates", "updated", "updating"]),
    (A, "modify", &["modify", "modifies", "modified", "modifying"]),
    (A, "edit", &["edit", "edits", "edited", "editing"]),
    (A, "change", &["change", "changes", "changed", "changing"]),
    (A, "restart", &["restart", "restarts", "restarted", "restarting"]),
    (A, "reboot", &["reboot", "reboots", "rebooted", "rebooting"]),
    (A, "reload", &["reload", "reloads", "reloaded", "reloading"]),
    (A, "start", &["start", "starts", "started", "starting", "bring up", "brought up"]),
    (A, "launch", &["launch", "launches", "launched", "launching"]),
    (A, "stop", &["stop", "stops", "stopped", "stopping", "shutdown", "shut down", "shuts down"]),
    (A, "kill", &["kill", "kills", "killed", "killing"]),
    (A, "deploy", &["deploy", "deploys", "deployed", "deploying"]),
    (A, "release", &["release", "releases", "released", "releasing"]),
    (A, "install", &["install", "installs", "installed", "installing"]),
    (A, "uninstall", &["uninstall", "uninstalls", "uninstalled", "uninstalling"]),
    (A, "enable", &["enable", "enables", "enabled", "enabling"]),
    (A, "disable", &["disable", "disables", "disabled", "disabling"]),
    (A, "grant", &["grant", "grants", "granted", "granting"]),
    (A, "revoke", &["revoke", "revokes", "revoked", "revoking"]),
    (A, "backup", &["backup", "back up", "backs up", "backed up", "backing up"]),
    (A, "restore", &["restore", "restores", "restored", "restoring"]),
    (E, "user", &["user", "users"]),
    (E, "account", &["account", "accounts"]),
    (E, "member", &["member", "members"]),
    (E, "service", &["service", "services"]),
    (E, "server", &["server", "servers"]),
    (E, "host", &["host", "hosts"]),
    (E, "database", &["database", "databases"]),
    (E, "db", &["db", "dbs"]),
    (E, "file", &["file", "files"]),
    (E, "directory", &["directory", "directories", "dir"]),
    (E, "folder", &["folder", "folders"]),
    (E, "config", &["config", "configs", "configuration", "configurations"]),
    (E, "setting", &["setting", "settings"]),
    (E, "permission", &["permission", "permissions"]),
    (E, "role", &["role", "roles"]),
    (E, "group", &["group", "groups"]),
    (E, "task", &["task", "tasks"]),
    (E, "job", &["job", "jobs"]),
    (E, "process", &["process", "processes"]),
    (C, "if", &["if"]),
    (C, "when", &["when", "whenever"]),
    (C, "unless", &["unless"]),
    (C, "after", &["after"]),
    (C, "before", &["before"]),
];

pub(crate) const ZH: &[Row] = &[
    (A, "create", &["創建", "创建", "建立", "新建"]),
    (A, "add", &["新增", "添加", "增加"]),
    (A, "register", &["註冊", "注册"]),
    (A, "delete", &["刪除", "删除"]),
    (A, "remove", &["移除"]),
    (A, "update", &["更新"]),
    (A, "modify", &["修改"]),
    (A, "edit", &["編輯", "编辑"]),
    (A, "change", &["變更", "变更"]),
    (A, "restart", &["重啟", "重启", "重新啟動", "重新启动"]),
    (A, "reboot", &["重開機", "重开机"]),
    (A, "reload", &["重新載入", "重新加载"]),
    (A, "start", &["啟動", "启动", "開啟", "开启"]),
    (A, "stop", &["停止", "關閉", "关闭"]),
    (A, "kill", &["終止", "终止"]),
    (A, "deploy", &["部署"]),
    (A, "release", &["發布", "发布"]),
    (A, "install", &["安裝", "安装"]),
    (A, "uninstall", &["卸載", "卸载", "解除安裝"]),
    (A, "enable", &["啟用", "启用"]),
    (A, "disable", &["停用", "禁用"]),
    (A, "grant", &["授予", "授權", "授权"]),
    (A, "revoke", &["撤銷", "撤销", "撤回"]),
    (A, "backup", &["備份", "备份"]),
    (A, "restore", &["還原", "还原", "恢復", "恢复"]),
    (E, "user", &["用戶", "用户", "使用者"]),
    (E, "account", &["帳號", "账号", "帳戶", "账户"]),
    (E, "member", &["成員", "成员"]),
    (E, "service", &["服務", "服务"]),
    (E, "server", &["伺服器", "服务器", "服務器"]),
    (E, "host", &["主機", "主机"]),
    (E, "database", &["資料庫", "数据库", "數據庫"]),
    (E, "file", &["檔案", "文件"]),
    (E, "directory", &["目錄", "目录"]),
    (E, "folder", &["資料夾", "文件夹"]),
    (E, "config", &["配置", "組態", "组态"]),
    (E, "setting", &["設定", "设置"]),
    (E, "permission", &["權限", "权限"]),
    (E, "role", &["角色"]),
    (E, "group", &["群組", "群组"]),
    (E, "task", &["任務", "任务"]),
    (E, "job", &["作業", "作业"]),
    (E, "process", &["進程", "进程"]),
    (C, "if", &["如果", "假如", "若是"]),
    (C, "when", &["每當", "每当", "的時候", "的时候"]),
    (C, "unless", &["除非"]),
    (C, "after", &["之後", "之后", "以後", "以后"]),
    (C, "before", &["之前", "以前"]),
];

pub(crate) const JA: &[Row] = &[
    (A, "create", &["作成", "生成"]),
    (A, "add", &["追加"]),
    (A, "register", &["登録"]),
    (A, "delete", &["削除"]),
    (A, "remove", &["除去", "取り除"]),
    (A, "update", &["更新"]),
    (A, "modify", &["修正"]),
    (A, "edit", &["編集"]),
    (A, "change", &["変更"]),
    (A, "restart", &["再起動"]),
    (A, "reload", &["再読み込み", "リロード"]),
    (A, "start", &["起動", "開始"]),
    (A, "stop", &["停止"]),
    (A, "kill", &["強制終了"]),
    (A, "deploy", &["デプロイ"]),
    (A, "release", &["リリース"]),
    (A, "install", &["インストール"]),
    (A, "uninstall", &["アンインストール"]),
    (A, "enable", &["有効化"]),
    (A, "disable", &["無効化"]),
    (A, "grant", &["付与"]),
    (A, "revoke", &["取り消", "失効"]),
    (A, "backup", &["バックアップ"]),
    (A, "restore", &["復元", "リストア"]),
    (E, "user", &["ユーザー", "ユーザ", "利用者"]),
    (E, "account", &["アカウント"]),
    (E, "member", &["メンバー"]),
    (E, "service", &["サービス"]),
    (E, "server", &["サーバー", "サーバ"]),
    (E, "host", &["ホスト"]),
    (E, "database", &["データベース"]),
    (E, "file", &["ファイル"]),
    (E, "directory", &["ディレクトリ"]),
    (E, "folder", &["フォルダ", "フォルダー"]),
    (E, "config", &["構成", "コンフィグ"]),
    (E, "setting", &["設定"]),
    (E, "permission", &["権限"]),
    (E, "role", &["ロール", "役割"]),
    (E, "group", &["グループ"]),
    (E, "task", &["タスク"]),
    (E, "job", &["ジョブ"]),
    (E, "process", &["プロセス"]),
    (C, "if", &["もし", "場合"]),
    (C, "when", &["とき", "時に"]),
    (C, "unless", &["ない限り"]),
    (C, "after", &["後に", "以降"]),
    (C, "before", &["前に", "以前"]),
];

pub(crate) const KO: &[Row] = &[
    (A, "create", &["생성", "만들"]),
    (A, "add", &["추가"]),
    (A, "register", &["등록"]),
    (A, "delete", &["삭제"]),
    (A, "remove", &["제거"]),
    (A, "update", &["업데이트", "갱신"]),
    (A, "modify", &["수정"]),
    (A, "edit", &["편집"]),
    (A, "change", &["변경"]),
    (A, "restart", &["재시작", "재가동"]),
    (A, "reboot", &["재부팅"]),
    (A, "reload", &["리로드"]),
    (A, "start", &["시작", "기동"]),
    (A, "launch", &["실행"]),
    (A, "stop", &["중지", "정지", "종료"]),
    (A, "kill", &["강제종료"]),
    (A, "deploy", &["배포"]),
    (A, "release", &["릴리스"]),
    (A, "install", &["설치"]),
    (A, "uninstall", &["언인스톨"]),
    (A, "enable", &["활성화"]),
    (A, "disable", &["비활성화"]),
    (A, "grant", &["부여"]),
    (A, "revoke", &["철회", "취소"]),
    (A, "backup", &["백업"]),
    (A, "restore", &["복원", "복구"]),
    (E, "user", &["사용자", "유저"]),
    (E, "account", &["계정"]),
    (E, "member", &["멤버", "회원"]),
    (E, "service", &["서비스"]),
    (E, "server", &["서버"]),
    (E, "host", &["호스트"]),
    (E, "database", &["데이터베이스"]),
    (E, "db", &["디비"]),
    (E, "file", &["파일"]),
    (E, "directory", &["디렉터리", "디렉토리"]),
    (E, "folder", &["폴더"]),
    (E, "config", &["구성"]),
    (E, "setting", &["설정"]),
    (E, "permission", &["권한"]),
    (E, "role", &["역할"]),
    (E, "group", &["그룹"]),
    (E, "task", &["작업", "태스크"]),
    (E, "process", &["프로세스"]),
    (C, "if", &["만약", "만일", "경우"]),
    (C, "after", &["이후"]),
    (C, "before", &["이전"]),
];
