//! Embedded libcurl easy-option table.
//!
//! Codes are libcurl's `CURLOPT_*` values, `CURLOPTTYPE_* + ordinal`, kept
//! verbatim from `curl.h`. The table is in header order; the catalog sorts.

pub(crate) const CURL_OPTION_CODES: &[(&str, i64)] = &[
    ("writedata", 10001),
    ("url", 10002),
    ("port", 3),
    ("proxy", 10004),
    ("userpwd", 10005),
    ("proxyuserpwd", 10006),
    ("range", 10007),
    ("readdata", 10009),
    ("errorbuffer", 10010),
    ("writefunction", 20011),
    ("readfunction", 20012),
    ("timeout", 13),
    ("infilesize", 14),
    ("postfields", 10015),
    ("referer", 10016),
    ("ftpport", 10017),
    ("useragent", 10018),
    ("low.speed.limit", 19),
    ("low.speed.time", 20),
    ("resume.from", 21),
    ("cookie", 10022),
    ("httpheader", 10023),
    ("sslcert", 10025),
    ("keypasswd", 10026),
    ("crlf", 27),
    ("quote", 10028),
    ("headerdata", 10029),
    ("cookiefile", 10031),
    ("sslversion", 32),
    ("timecondition", 33),
    ("timevalue", 34),
    ("customrequest", 10036),
    ("stderr", 10037),
    ("postquote", 10039),
    ("verbose", 41),
    ("header", 42),
    ("noprogress", 43),
    ("nobody", 44),
    ("failonerror", 45),
    ("upload", 46),
    ("post", 47),
    ("dirlistonly", 48),
    ("append", 50),
    ("netrc", 51),
    ("followlocation", 52),
    ("transfertext", 53),
    ("put", 54),
    ("progressfunction", 20056),
    ("progressdata", 10057),
    ("autoreferer", 58),
    ("proxyport", 59),
    ("postfieldsize", 60),
    ("httpproxytunnel", 61),
    ("interface", 10062),
    ("krblevel", 10063),
    ("ssl.verifypeer", 64),
    ("cainfo", 10065),
    ("maxredirs", 68),
    ("filetime", 69),
    ("telnetoptions", 10070),
    ("maxconnects", 71),
    ("fresh.connect", 74),
    ("forbid.reuse", 75),
    ("connecttimeout", 78),
    ("headerfunction", 20079),
    ("httpget", 80),
    ("ssl.verifyhost", 81),
    ("cookiejar", 10082),
    ("ssl.cipher.list", 10083),
    ("http.version", 84),
    ("ftp.use.epsv", 85),
    ("sslcerttype", 10086),
    ("sslkey", 10087),
    ("sslkeytype", 10088),
    ("sslengine", 10089),
    ("sslengine.default", 90),
    ("dns.cache.timeout", 92),
    ("prequote", 10093),
    ("debugfunction", 20094),
    ("debugdata", 10095),
    ("cookiesession", 96),
    ("capath", 10097),
    ("buffersize", 98),
    ("nosignal", 99),
    ("proxytype", 101),
    ("accept.encoding", 10102),
    ("private", 10103),
    ("http200aliases", 10104),
    ("unrestricted.auth", 105),
    ("ftp.use.eprt", 106),
    ("httpauth", 107),
    ("ftp.create.missing.dirs", 110),
    ("proxyauth", 111),
    ("ipresolve", 113),
    ("maxfilesize", 114),
    ("infilesize.large", 30115),
    ("resume.from.large", 30116),
    ("maxfilesize.large", 30117),
    ("netrc.file", 10118),
    ("use.ssl", 119),
    ("postfieldsize.large", 30120),
    ("tcp.nodelay", 121),
    ("ftpsslauth", 129),
    ("ftp.account", 10134),
    ("cookielist", 10135),
    ("ignore.content.length", 136),
    ("ftp.skip.pasv.ip", 137),
    ("ftp.filemethod", 138),
    ("localport", 139),
    ("localportrange", 140),
    ("connect.only", 141),
    ("max.send.speed.large", 30145),
    ("max.recv.speed.large", 30146),
    ("ftp.alternative.to.user", 10147),
    ("sockoptfunction", 20148),
    ("sockoptdata", 10149),
    ("ssl.sessionid.cache", 150),
    ("ssh.auth.types", 151),
    ("ssh.public.keyfile", 10152),
    ("ssh.private.keyfile", 10153),
    ("ftp.ssl.ccc", 154),
    ("timeout.ms", 155),
    ("connecttimeout.ms", 156),
    ("http.transfer.decoding", 157),
    ("http.content.decoding", 158),
    ("new.file.perms", 159),
    ("new.directory.perms", 160),
    ("postredir", 161),
    ("ssh.host.public.key.md5", 10162),
    ("opensocketfunction", 20163),
    ("opensocketdata", 10164),
    ("copypostfields", 10165),
    ("proxy.transfer.mode", 166),
    ("seekfunction", 20167),
    ("seekdata", 10168),
    ("crlfile", 10169),
    ("issuercert", 10170),
    ("address.scope", 171),
    ("certinfo", 172),
    ("username", 10173),
    ("password", 10174),
    ("proxyusername", 10175),
    ("proxypassword", 10176),
    ("noproxy", 10177),
    ("tftp.blksize", 178),
    ("ssh.knownhosts", 10183),
    ("ssh.keyfunction", 20184),
    ("ssh.keydata", 10185),
    ("mail.from", 10186),
    ("mail.rcpt", 10187),
    ("ftp.use.pret", 188),
    ("rtsp.request", 189),
    ("rtsp.session.id", 10190),
    ("rtsp.stream.uri", 10191),
    ("rtsp.transport", 10192),
    ("rtsp.client.cseq", 193),
    ("rtsp.server.cseq", 194),
    ("interleavedata", 10195),
    ("interleavefunction", 20196),
    ("wildcardmatch", 197),
    ("chunk.bgn.function", 20198),
    ("chunk.end.function", 20199),
    ("fnmatch.function", 20200),
    ("chunk.data", 10201),
    ("fnmatch.data", 10202),
    ("resolve", 10203),
    ("tlsauth.username", 10204),
    ("tlsauth.password", 10205),
    ("tlsauth.type", 10206),
    ("transfer.encoding", 207),
    ("closesocketfunction", 20208),
    ("closesocketdata", 10209),
    ("gssapi.delegation", 210),
    ("dns.servers", 10211),
    ("accepttimeout.ms", 212),
    ("tcp.keepalive", 213),
    ("tcp.keepidle", 214),
    ("tcp.keepintvl", 215),
    ("ssl.options", 216),
    ("mail.auth", 10217),
    ("sasl.ir", 218),
    ("xferinfofunction", 20219),
    ("xoauth2.bearer", 10220),
    ("dns.interface", 10221),
    ("dns.local.ip4", 10222),
    ("dns.local.ip6", 10223),
    ("login.options", 10224),
    ("ssl.enable.alpn", 226),
    ("expect.100.timeout.ms", 227),
    ("proxyheader", 10228),
    ("headeropt", 229),
    ("pinnedpublickey", 10230),
    ("unix.socket.path", 10231),
    ("ssl.verifystatus", 232),
    ("ssl.falsestart", 233),
    ("path.as.is", 234),
    ("proxy.service.name", 10235),
    ("service.name", 10236),
    ("pipewait", 237),
    ("default.protocol", 10238),
    ("stream.weight", 239),
];
