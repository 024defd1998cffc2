//! Mined regtest fixture: an epoch start header at 20160, a main chain over the
//! 22176 retarget and side chains branching off it. Times advance 600 seconds
//! per height from 1700000000 at 20160.

use bitcoin::absolute::LockTime;
use bitcoin::transaction::Version;
use bitcoin::{Amount, OutPoint, ScriptBuf, Sequence, Transaction, TxIn, TxOut, Witness};
use hex_literal::hex;

/// Regtest header at height 20160, bits 0x203fffff (difficulty 2).
pub const REGTEST_EPOCH_START: [u8; 80] = hex!("0000002075f58b25fedc4ab192caa5c89e43743ed2d497513fba9c7dd095c9f914dd06f7b538430ed49a73efb74afbbd39ba8d133f118541aa3aa139faea8209a076057e00f15365ffff3f2000000000");

pub const MAIN_CHAIN_START: u32 = 22136;

/// Regtest headers 22136..=22216, retarget at 22176.
pub const MAIN_CHAIN: [[u8; 80]; 81] = [
    hex!("00000020324d55f4ab795ad45d2ea1931e5d8b5e5d17a4d04b39c85d0b4b9c027ac3daf7b8dd84c964d9711d027a027c54d157e1d29e509b2ed470c91d3012a68126581240086665ffff3f2000000000"),
    hex!("000000207e0dea64fdd548f7044d3a948b710dc627db24ee0c24ec1564297fee0cf9570c7ed6377497e40a024c24caadabb714b7d11354d6e4ce5d6fbf1d5b2016cad913980a6665ffff3f2000000000"),
    hex!("0000002096bd7291d6c53dadcfb5c2b64e8ef7ad856db476e51f74375c15db234882ac0e8511b641e0425e12d6c0d158bef3fef4b06813652d6d9a721d10c64643094fdaf00c6665ffff3f2000000000"),
    hex!("000000209c7f7f351ccc5825d2d1487a109f6e2a5b741cbf37311b63b75afacc1514c511771e1d8a6029eb4d2246a38e4bb5dbdcde31483b1b1000503a78374abb29a10c480f6665ffff3f2004000000"),
    hex!("00000020b97ac22da1dac8371ff3f486219c41a1e2132d17f52f1e10f14fc4e130924714c7d32ce61ffc5a8e1e08f808b47a7a63e480fd9de20466b74faef61f0df442d4a0116665ffff3f2001000000"),
    hex!("00000020caaf11e95bc086beb215785887b57bd52cb76c069b61ce6758fa73ef57d75612657584d42ba3703f820d653d963eb910d1d646d4eb9ed5c498976949fdd47ac6f8136665ffff3f2006000000"),
    hex!("00000020a39d74260dec6776442cf1169f24bde63eae830b5c003b855fca0ccf428c933314ce3916cc1626f2b8995e51f22992a95c5c5813faa4e88eab112062181ecaae50166665ffff3f2000000000"),
    hex!("00000020b54098c733231693d5962bd5ccac674a5d60c801ca942805af6f9c50ec484512622c0d5b90ce9b7386174e91abd6476cb0d245758d252295bc7aa22c1003f6e6a8186665ffff3f2008000000"),
    hex!("00000020f77dbd4eeabbcfb5ca655af93d1d45a04371c86bfd4cfc7c584327583f33d42a9c819547012acf6bafba3d82dca02bcde438e4558a1bc8c5250d5245a8876619001b6665ffff3f200e000000"),
    hex!("00000020b9980d0ff3a5adf6751e76d53d63941758cb212afafa22b8ff0307755b26fe1ffa5ab5af45b65a1ba7906cc3593b0d3fb04ab74b6e30605e6ee959f40b3ade0f581d6665ffff3f2001000000"),
    hex!("00000020b3c202c1a48088dd493514145f5742208b0dd3d29d9f80fa1a3589fc98adcf2c93d2be4c31b7c0f561d16668578eb946c1ce8a958af18c70cda08bbdc01f9b36b01f6665ffff3f2005000000"),
    hex!("0000002065c2f11315c85e8baaa854c3be100658a72b7ca372b1999fb79dc062f140b306881b5efec95edb616d5b489ea28caff3447a8c2476e8c029fb032b1ffa8d152408226665ffff3f2002000000"),
    hex!("0000002039d92ed8b5ff93d42d7c00419d64ff4a853283837aebd780d7e923da646e4f1c4b47b20cb1248b246b62a2d49e5f8de85b0ea56dc5df12d0004494e4f4f6917d60246665ffff3f200a000000"),
    hex!("00000020d9c30450762d58b34f3b5d673d5c925149971fb68ca4cd0f6568826c0f1fcc2a6bfb2b3d3e928d33f3bc0178ae0dc3ec009482bb28c5b8f950ec3730f75f5fefb8266665ffff3f2003000000"),
    hex!("00000020cfd711c340fa0cc1abc63b0389942317150b00dd9f9014da4430a313b75b7922deb3fb304769b7c1ed65607d15dd4b616cfe0b2a1524fdc0db4f50b305eb628610296665ffff3f2001000000"),
    hex!("000000206cb2ee6fc5c58e8d9c9d8f4a0012205dc445ae7a6996f23e0d2a61069d3f9232535a5ef59b2c258c13f7fa3ebfb975b137241251906b8ca361535e9393c1d497682b6665ffff3f2003000000"),
    hex!("00000020d452137f85cda9e47d0eef3415fb81c05abf6e82dc46052f42189d09abc4a6084d98b6eef8b07261ae3675217c3ac7d6e231df0cf8c9ae5493b5cd2ad0e270aec02d6665ffff3f2000000000"),
    hex!("0000002030ea7e3c0079fa04592855fc39503954d68bd1734e36db37829e88ae7977831170e51f10fb168650dab2b71be797ddd6ed770b2eb6a11f2e7b1b5d7eb1793f5218306665ffff3f2001000000"),
    hex!("0000002085f9a8efc66d8e0e3f51ef9aeb37f4b744ffa1b66bbd9b0993c7f0e42771fe3f7db19040bfbd8729c3989c41c6c3e149c87d7937a4709c3036127500b7c24d4070326665ffff3f2001000000"),
    hex!("0000002091cf3a87cd1acb0130b951d7c10e918f6390e80acaa7c6e685979287a4daf028976b01296f27ead8dc083eda7d8fe125df1f344214f8cbcd1219b9a037f31333c8346665ffff3f2000000000"),
    hex!("00000020a388274584bd53fa3cf21c8762ed7c22087ee346438c151c5fcdd54f6c38862c7c3f3dab23f14ea63392c643e570a53af96e4bc81d47b0afdf6b95dbe94892be20376665ffff3f2002000000"),
    hex!("00000020a3710cdfaebb5b4176f9199cadec25b728420835f1b2c243c5698e61ff43d81f4eff7a288e969f58416b774f86a3d6bf4e4e74ae1136e787dd41a3953b7ff5cd78396665ffff3f2002000000"),
    hex!("0000002095a22954cc9c842ea4e44bf4daefbefa741d31f0d287630a1f67cf9317359203ffbb70a218c60429679e1a120633b04d94641197cf6f006a0d70a5ff1bf0090ed03b6665ffff3f2003000000"),
    hex!("00000020bd272c92c01fbd3de92d744e6632c0af8e87db63a73dce849288ec647c8bcb0c7a050dc8ef2b76a0b3b2cf862c997fb4da2824d0e3a706687f7d64f560675ed5283e6665ffff3f2002000000"),
    hex!("000000209f1645ca118d45f509a5b0b88b8793fed8498e222332ddd04e994442a577ee16737230791c07d7f615b823c37d7526f77714fe9b5bec7c13cc1591833ab64f6e80406665ffff3f2005000000"),
    hex!("000000209915ec2df531168015ec1896f7220a2bf1826f8438145cd73e94b5cff295bc051feb5ec5ab4d96920802c12d09e6e995253f6c8524b2b0dceb960dc604f20e94d8426665ffff3f2005000000"),
    hex!("000000209544c78972c300339ce6a60f1a17ba612e15e26ec9fd5479e5f576e2a2295d3b6bd52036bb574b8b491042204e347577710a145f70427b17b5f7b5ccc472947230456665ffff3f2000000000"),
    hex!("000000204da47338f20c47032ce246f1725d053eafaa8fe8798247cfe73d998885c16611bec4be34540a6fb3af1165b8150645692badfc19bce054ffa4bbf7b7aee59bf988476665ffff3f2000000000"),
    hex!("00000020b68c63831948b8ad84525104023f72e64d12d720f07176295de9ae1b7b1aef37149877093a0d159d68a1273f75ac6a32a0d4f3998b7d9fa46ae8641af151f1a9e0496665ffff3f2000000000"),
    hex!("00000020eeeb9b4b8d2293d91d6f05df046f290a39757096375cb3eaee8210ee5f7881022f4bb2a3f0bae0272cc8d8facec01619b6dc8d7befa552b63633ff172c7317b5384c6665ffff3f2000000000"),
    hex!("0000002007404647153cbc4d94338ba2536a5f3bd6ca032923e8d67e619fba702caf40178dc8a4559a6db127e4a660d603da6598fbe723ecabd432360176c567813e54e7904e6665ffff3f2000000000"),
    hex!("00000020b99368ff703af99a0aeff49c02f8b99899c98eedd726e6e3761776e73ed47b102c50d25427d2d980cb1317f02c64e97e6b07a3e3a5f76f48334fbeb2bdb1098ee8506665ffff3f2000000000"),
    hex!("00000020b5778bbebddbb3e8ad34c9aeea6c5ad563b89edc92491a92e0d013ca6208e82c4048625c694383ab764b82fd38682a8031516b496385e00a037a88161c11160540536665ffff3f2004000000"),
    hex!("00000020a55bd4585c5bc1a3d9fc0d67f2448b5e416ecbb1b6da20f76a3a6673e3052503a5386f671b3abf655dbeb3d0714b71f247bf6fce8a22a1543f94b88d74f3b33f98556665ffff3f2001000000"),
    hex!("000000202a93cbe7262a207e16e2e188b36a97c25f9c3d9e5ee694eea0f1c18151c0560eec33efee8d0eda0de2778a8cfbff457f2add92787cdcf7243217ba19c0159755f0576665ffff3f2001000000"),
    hex!("0000002067cdac049e11ea3a3188674780beb9fdef346a3e6f59ff26d3817bc8016afd0000389540ed7208a1d9cecd8117d34814c3b0b5a028347bedfe2555e3d2377a18485a6665ffff3f2001000000"),
    hex!("0000002066b332055e34687b00fb6095307581a425f996537f1c46d419484f01a9217f2c807a321a73970a40de7a767f1833bb282ed81ec0dc443b52392fd48facc15fd7a05c6665ffff3f2006000000"),
    hex!("000000200b23aa9e7826a9ad1af7d95caa8f8a211529da6d623b0731837cbabbb19f0228f9b35742750dd1724c4a73f5862f218d31d0ec877fd0f49a798b3b9b1b10ec39f85e6665ffff3f2000000000"),
    hex!("00000020873c8ab5278302d040e00656c431f6727b90248119c1143b74b5bbb4a9e60e1738b1b2f1e4e998ac2f4cb020ef4ce3bfc3195df14369bf199ad4351cf36540ab50616665ffff3f2001000000"),
    hex!("000000205097eacfa32b1456fb4c0388c7446293a39a1295d91e48c89bf9d926354d2a36af53e5182c1b8732f80bd8f890ea2839d5698f9f8b74bee65d161837813f7f87a8636665ffff3f200c000000"),
    hex!("0000002059e4c61e40b326ad871dd6f27b4b6205789b631cade92e5c2cf2a1f11228f521312251a2a238ee708ed53f6ae293691306b626d120f786b4f6a8d869b47e056c00666665aaaa2a2009000000"),
    hex!("000000204d7caa5caa851a10c6da7e75867aeb75b0bd18ee73ed151bdb33b27dde2b6603450130dfb3325e43f538eeedba74b79ca85b5b58daee690cf935db9abb53f2e758686665aaaa2a2006000000"),
    hex!("0000002000fb3825028209ba6d1976d4eaf48c405d4f3933ab036670687589602f1a61140dcf6159b1465318fe3dafac8ca931b3eed5f4c63dd293a2a82428ec23f200fbb06a6665aaaa2a2003000000"),
    hex!("00000020770be324c35a512a6ed9d23035d854f8f317d164d10f6083e977d13f9e32010be8a05d14ff2a3bc2e27763b3ba9c1b92d009d85a1142d73161e37e4695e6a4f4086d6665aaaa2a2001000000"),
    hex!("0000002023843f1a72a54525ebbb6ef2465bafccf81d1256b3bb3947c90bfda9a894c81850e6060c6b81c64eedbbe0bf6d061b04c593b0532fa4c4c2d012b9a7755fbc83606f6665aaaa2a2001000000"),
    hex!("000000201040bcd6292c9bda86270fb5e4316d0e6da06df0fe9c458eaa0f9c4248d80d0937676bd972f873e313cdff5fbf1ef1aa865bfa0f991674231a79c346800615cfb8716665aaaa2a2001000000"),
    hex!("00000020856eb1cbad2bb661bb057f4c1ff7f6c13a2de508c5164d4fc2aba3d72317b11a7416c3acfafd9015188df7393d284bcdee98293d12e6eb96f86c692b3a2804cc10746665aaaa2a2005000000"),
    hex!("0000002067114d4f064f1d19cf8ea57b0893acd0492ec494ae5a0ba9226d38f2df92360156a41ae7d998c3f05bee921757d5948101b97baf0e902e1a907338aff597360268766665aaaa2a2007000000"),
    hex!("00000020b11d11b91d4b66110c81aab5e45dd6557bfa4a9a61ff8d4d4336e9ad4c545a0bd6d38bdc616dd88bc1aee18eca0d7f60a2c681103ff0f0fc34269ca93c5a5d51c0786665aaaa2a2001000000"),
    hex!("00000020bda0db079b7ac91b6d0baa9346dd8e3af5c134c23e8d68b543629c1e92b65d14b08cc8d65947f6b33f2e84a067b60e27b99213d491445ff807298ed8a0bffea7187b6665aaaa2a2002000000"),
    hex!("00000020e29954077432df4ecdfb7461467b8cd1e70af874bdabe1d0a79ac0dd476e0b17303d9e030b7f8b29627f3b7b1c99d3d5eae990aed5409dc7a81ff49666e9b77d707d6665aaaa2a2004000000"),
    hex!("00000020b497737846c8d24fbb3ec1a183fb2039ba11aaa479f051361dbb73967b0aaa0cc58109299c960b360e37bf481e9caef6650b70b4d5c6aa7d1c4d427d63841655c87f6665aaaa2a2002000000"),
    hex!("00000020cbb9877f4d8aa52ceffc914ba185317f82b940bdf502540df0abd040960923207f26aeeef97e4065c2cb28ff547ec299f03699d1be547e35a22d2e315eac002b20826665aaaa2a2000000000"),
    hex!("000000206e15a4392af627380abdd038e60fb324d9978a9f6a0c82382b4316a411372e0378479283cb6ae0e1a3cdb5dd2603e3c02fa5b29bf923d5dd1e9395cdcda0e8e778846665aaaa2a2006000000"),
    hex!("00000020a62af1ac2ddfba9b2ed1ca86518a4faab069c71f7a007d1818a45441f9d1922708f3d8be0bd7115b03c528f2144232a50df0a95b9cdcaa4e83d4bc30c8826ca3d0866665aaaa2a2000000000"),
    hex!("000000209e90a1685401e8b4294d424ca4fe8807aed4121406a2ba6bc56f0fe2c772d0122f088f1ac517b46ae855b9c9282264c0bd2b364ff2a0695ca401d70fdbe40f7d28896665aaaa2a2002000000"),
    hex!("000000203ec4045867079857b251b04d4dd7b9755a9eaf73cc52369616c6f5d8679a50105b7c08e742bcafc4cc012bd0989c39111c4b2115adec9eeb9159bcc5512206af808b6665aaaa2a2015000000"),
    hex!("00000020ff1f203f89b3bed7aa1a3cb0dab43467ef7db0a17333cbf150c6c385efba6326aba4df28e386b42976ce8eacba5dcc3f81cbfb904ec1e851c6c1e7af9fc6c932d88d6665aaaa2a200d000000"),
    hex!("000000202167c1f81e91ba70da2118c175f0525602e04939f9e7ecfde1f428b3249d4b223502deba054a537503e029d3840db1b8b607d3acf407557064df40f701ce2a4930906665aaaa2a2003000000"),
    hex!("00000020cc29d4f6def0690a48adac67b70273ecbdd59a82ddf474124407c219f96462201559d61af3758e5c49bc827dbfab6817a0f166ffe70a1f26ed1af9a0f1886d2088926665aaaa2a2001000000"),
    hex!("000000201fa7c4632eb49aa0d54de158bf6b8690039ed6c4df5f098c0023d0293cd4d025e6e22d395ad003d9ee783718f16ee24c09459b2940a0da129c56454c2ba93a3ee0946665aaaa2a2000000000"),
    hex!("00000020ef595c83c89d5cb83789039e01806c5250b7c19a16aa9fd873d29b503074861d8af22d432a2b184626ee507f64c5110a5a26281b80849c4782b467071f748c8c38976665aaaa2a2001000000"),
    hex!("00000020f30eb9f3e90e26a6e21d58153bc3c6e56ecaf589901db76ccbf1a9975d2d92091c90b20d488e48825ac1e65c85693bf151cdf05310260b18aa14bc43b45b342f90996665aaaa2a2009000000"),
    hex!("0000002053ad0e17d6bb92fea86c7e918b5eb8fe762e6641421b92e935dc58ae6a33601a9fcfe219f948ac74b8312e7ca91f429f7cfbae282c1f702acb4f157bcd239d41e89b6665aaaa2a2006000000"),
    hex!("000000203632855121603753a3e12ae2b0cc6b90e59ea09a697271f7b2cef8cb7cce1d02d68a66b23a125e22a05d8a71ea6957da10532c613f8be6395c09bcf0bb0ce4a3409e6665aaaa2a2006000000"),
    hex!("00000020f158441b1306fe534efea9c9b58312afdafbcf0cc6b20843af6b09087f69940aacf4d5a85083f1122304d8fd1541d9bb0c880dbdd4cdd3458258a0d018e0446898a06665aaaa2a200d000000"),
    hex!("00000020d9cdcf806ad4d29559a89c1a75bb8573b105315b1a5111890b396e7864759c08ec50cbea8b4b4c1411e811a440140198f248d3bc0bff1d64f1cefd92e3ba9f4ef0a26665aaaa2a2006000000"),
    hex!("00000020384ac8c32bfd648ba336c2a661a40fedea3d9d6c116d3bb79eea85e7c3c60903a298d1925361098b9b552b7cb971576c86186f26d04e4c08f6b60f892bc5ac0c48a56665aaaa2a2003000000"),
    hex!("00000020aa1ca317a273ce63e04bb9b53866fcbd897808613e6f2f3a2fbf84c0e633bf1c99bbdeef25203b15e92242bfc0675d81b77935292dfa8ccd6bea712e51a3c773a0a76665aaaa2a200e000000"),
    hex!("0000002006eb5a0eec7f780ff217569e6c0342ebba82f446a850346ae29bfde48686a927967caf3df249b7a2f5070879dededd30c2c01460f9d4a658c0c448e98b794556f8a96665aaaa2a2006000000"),
    hex!("0000002058220463303a467e5d1b7182bbe98c5d1dbde9d053cc14be96c494de1b4e1f1feafb2b1a536d015781b508f67f4a0e2186861b6e8c30e852b842382d1b8a867850ac6665aaaa2a2004000000"),
    hex!("0000002070c5395188c056a2f73e39769b2b114ad06c75a98e89d662ef6159cd26a5b21a900fa23e9a4e8d33d65799bab0214cfdabfe3c9998becc5db09258e714238dd9a8ae6665aaaa2a2008000000"),
    hex!("00000020883765b0b10fd8c3b9fc0437e49d256f6c5bf8b2e7dbc79bcd5308126544db1d04c61ab6fb30fa7dcdbd6b16895dbd81d738abc49275f973f61b104b0f109a1600b16665aaaa2a2000000000"),
    hex!("00000020c6046b29e83a6c3d84b693103b6fab750debde4a0b2a4ff797dbd8f332f80c09d1c7c1f9b06b9489cce135cd27d75e6df711c83f27bac0bb970c531cc08dee2658b36665aaaa2a2000000000"),
    hex!("00000020743256c666c314fe954de7ef6f952eb20d566099bb04b33fcc2aa693bef46f145e6cd7bd78114b8573729075a8b0e931217d0fa8b7d80f334fd444a66f898261b0b56665aaaa2a2003000000"),
    hex!("00000020ceb5f51f60ca8ff6c4985e23c7568eca8ee573e83eff9545c304d68fdb913e2399fdde94e9b57cfb55bc4b014ce5f21e83bf2353222ac210d0acae8ed8dc179708b86665aaaa2a200f000000"),
    hex!("000000203d70cd5c41326f1634294bbae12cb3c7f4fbd7ef8deef7fc7a7d4e0f3ed3aa02caa1e2ca31dc121c3d8a09742de2470a31282b809ffe0b8e96a52946d7ef9eca60ba6665aaaa2a2003000000"),
    hex!("00000020e1c22311934ba49715bbb3e759e9539767de5085abd7aaa5a13ff0f2bb701a25d7ac83aa13d0da5e87221cd367b7057b0283a8e38c6bab0aa78676274a5ca1f4b8bc6665aaaa2a2002000000"),
    hex!("00000020e2880a52e0d5e38a5ddea61b190470e2f5c046b3244eaf8a2113eb899c0f9b26bb62e2364e7fa7d216e70f9f863720cc8b8274ef3521d5dc29d2bcc5c4f088ad10bf6665aaaa2a2008000000"),
    hex!("000000202ab2c240f6ef502848b320308e3dbaa647a3dae7a18df77783cff8f8747f2b0dc4e018ead20b634ebea0539b8f77c27dc1840cb1f75a16ac32629a4325282a8468c16665aaaa2a2000000000"),
    hex!("0000002058220ddd96a7a6362617bc69b72de285f1caa123f92030114a5c95c799ea1d21d1aaea2b939e9e24b724fdb38c8b8d9b2e219cd1f9ee18916e88f66fc699023bc0c36665aaaa2a2001000000"),
];

/// Headers 22176..=22179 built on 22175 with a fivefold difficulty jump.
pub const OVERSIZED_RETARGET: [[u8; 80]; 4] = [
    hex!("0000002059e4c61e40b326ad871dd6f27b4b6205789b631cade92e5c2cf2a1f11228f521acaeade55cec23396cb65b7a16f9bc9b679ca3945bca1fb334e491e6ef02526407666665cccc0c203b000000"),
    hex!("00000020e44e69ab51967a35b759204fbde5bb97a6b7e1a3bd519ff15271d0fc33236a0a347643a319f07b9eb7e6604d897cefa24850349d6cf37b13ca33eeaf237e43ca5f686665cccc0c2002000000"),
    hex!("00000020f4308d83896aa176e16419d0a0733634f86481af89fe47bcb50645995f6d6e0bcf0dd8e5f96c3b3056933e434145616fdbed8bfc58e4b3e3a82c3437edb78fd0b76a6665cccc0c200d000000"),
    hex!("00000020c9ef852abe1c3c0593795d837e8e5e729d4c0b834e82e4b5c13986ae66fe63013e241bda76fec148aa5fffef67851e193786155a3724eceaa9c0760cceb5180a0f6d6665cccc0c202c000000"),
];

/// Headers 22144..=22149 built on 22143.
pub const SHALLOW_FORK: [[u8; 80]; 6] = [
    hex!("00000020f77dbd4eeabbcfb5ca655af93d1d45a04371c86bfd4cfc7c584327583f33d42adc5a74b16d4d80f7a2b5b6caebadf4111ffffd9dce506161e27f6ee117c13b170b1b6665ffff3f2002000000"),
    hex!("000000208cf309aa7f8818c99fcc6346ac9a6ef54b7b306784da08e59b7fa46e2a834535893c519bf41a5084458df9552dcf653aef31f1154173a6698e89237c47503165631d6665ffff3f2002000000"),
    hex!("000000202bba1f7a92707ce4af28f034d4aa0efdd2f773e0d67eb9a23601cfc6abaa2a041906a6d28d142b0b3aa7ec62d89760b371c46ca866459d2f2456d53a842406f6bb1f6665ffff3f2000000000"),
    hex!("0000002087267d14d66a1420bd715e97462fd885d3a519123a0fa6d350c091e4fc75ad2a62153b895ad8c0540d1ab026ee18283ee2061b9840cdb69f4d3fdad5d857f6a113226665ffff3f2001000000"),
    hex!("0000002088e8ea7482e7d0ace4b0b974a35563878b985c339be18a39670c496ebd6b001b3ab8e3212b6b383292b9341505093349fa064d34e28ac3fdade450c688be1c086b246665ffff3f2000000000"),
    hex!("0000002096ef0dce2c3baf3e8b3312362adb868b4f7f43da667c5a373afe41fd010cba257529e25885f180ca112edda4628db0002e9a2ac3012c07642f66eac6adfd1804c3266665ffff3f2005000000"),
];

/// Headers 22174..=22179 built on 22173.
pub const BOUNDARY_FORK: [[u8; 80]; 6] = [
    hex!("00000020873c8ab5278302d040e00656c431f6727b90248119c1143b74b5bbb4a9e60e172f1872cfa4fd0f2ade98ec96c065f7ef6bdee0e6206079139277fd102096b5735d616665ffff3f2000000000"),
    hex!("00000020fed283a103cba27d764b604c2d202448426c2d284d015159030ba2de2cfd1f12eda6f12550d75aa6aa67e1071c8bd57d29b859039d8ef6911b02b24716a9e40ab5636665ffff3f2002000000"),
    hex!("00000020a159db77f790a29d4e8b8e2f511400f955ef0b37e92ddbe4bb909649cb81542e8eab421f9d896aa0db0be1411c3f92b89dcaecafede8e39497332f66a9cf52850d666665aaaa2a2006000000"),
    hex!("00000020111d5fda2e23a14c7a5d9ddb3f98286afd380a6cd5b7d34b83f764af2671cd156a48d7abd9c5dbe0328aac7b7075a26b8e224ab86001ab3594f86a26ea60474165686665aaaa2a2000000000"),
    hex!("00000020280095e6e7b5871f457c255a4816a14499cf6cc4ba6510a0a43f185c411bd4059c41d938fb8d9efa01802a6398c86f09b6cbeb223ce6a43d81c23c34b13e3692bd6a6665aaaa2a2013000000"),
    hex!("00000020ed820d03056e27154fa6df65bd5305733aad084369c750b00fe32203c158ae0477879dcf0d8ad1de21fbd29e5639dced8c10d58c7c5e5165d59183cab8621618156d6665aaaa2a2000000000"),
];

/// Headers 22180..=22182 built on 22179 with the difficulty dropped back to 2.
pub const EASED_CHAIN: [[u8; 80]; 3] = [
    hex!("0000002023843f1a72a54525ebbb6ef2465bafccf81d1256b3bb3947c90bfda9a894c8185a76faa07219a6cfd2c405af0ed8b3001fb423263744397ce48dc9b3bdffe503716f6665ffff3f2002000000"),
    hex!("00000020bc33213ad016911e3e0e4b6b391057dcee18156c6748ba122dfc649f3b3a9c0b36e0b9958211f68b13bec12bafcd925a9e2e78157c0f650d2fab01364b21265cc9716665ffff3f2000000000"),
    hex!("000000205b90d3a9c129db1f61dde13ddb3d93ccafd47d2b7022f5362ab9a84b456c9d03b4e5b2648db7788b09fb21922bb2fb348c13857ee11d8547137a6403c0247bb921746665ffff3f2002000000"),
];

/// Transactions of block 22180, internal byte order.
pub const SPV_TXIDS: [[u8; 32]; 3] = [
    hex!("b5f16e9cf1dc3452b5e4baeae725a2067d1af7e1a30aea477c7c9896bc08bc19"),
    hex!("334c2918ab34ec4e3e60952b6bac9fb00763bbaa9ee8dd0c9981d2c33bbd3bf7"),
    hex!("9317f079b13a0265614a3761d9bf97b03829dbe5e612d21e4fbe7f5aa4fdbde6"),
];

pub const SPV_BLOCK_HEIGHT: u32 = 22180;

/// Merkle branch of the third transaction of block 22180.
pub const SPV_TX2_SIBLINGS: [[u8; 32]; 2] = [
    hex!("9317f079b13a0265614a3761d9bf97b03829dbe5e612d21e4fbe7f5aa4fdbde6"),
    hex!("00c94ba40a9cb7c9c2c3aed8c2e75306c94637f0a68018470ad14225297e1e1f"),
];

/// Mainnet header at height 766080, the first block of epoch 380.
pub const MAINNET_EPOCH_380_START: [u8; 80] = hex!("0000402089138e40cd8b4832beb8013bc80b1425c8bcbe10fc280400000000000000000058a06ab0edc5653a6ab78490675a954f8d8b4d4f131728dcf965cd0022a02cdde59f8e63303808176bbe3919");

pub const MAINNET_EPOCH_380_DIFFICULTY: u64 = 34244331613176;

/// Headers of the main chain from `height`, concatenated.
pub fn main_chain(height: u32, count: usize) -> Vec<u8> {
    let start = (height - MAIN_CHAIN_START) as usize;
    MAIN_CHAIN[start..start + count].concat()
}

/// The three transactions committed to by block 22180.
pub fn spv_transactions() -> Vec<Transaction> {
    (1u8..=3)
        .map(|tag| Transaction {
            version: Version::TWO,
            lock_time: LockTime::ZERO,
            input: vec![TxIn {
                previous_output: OutPoint::null(),
                script_sig: ScriptBuf::from_bytes(vec![tag]),
                sequence: Sequence::MAX,
                witness: Witness::new(),
            }],
            output: vec![TxOut {
                value: Amount::from_sat(1000 * tag as u64),
                script_pubkey: ScriptBuf::new(),
            }],
        })
        .collect()
}
